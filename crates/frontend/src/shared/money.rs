/// Price formatting for display.
///
/// All amounts on the site are Swiss francs with two decimals.
pub fn format_chf(amount: f64) -> String {
    format!("CHF {:.2}", amount)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_chf() {
        assert_eq!(format_chf(20.0), "CHF 20.00");
        assert_eq!(format_chf(9.955), "CHF 9.95");
        assert_eq!(format_chf(0.0), "CHF 0.00");
        assert_eq!(format_chf(1234.5), "CHF 1234.50");
    }
}
