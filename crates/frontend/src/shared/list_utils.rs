/// List sorting helpers shared by table views.
use std::cmp::Ordering;

/// Trait for row types that support sorting.
pub trait Sortable {
    /// Compare two rows by the named field.
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering;
}

/// Sort a list by the named field.
pub fn sort_list<T: Sortable>(items: &mut [T], field: &str, ascending: bool) {
    items.sort_by(|a, b| {
        let cmp = a.compare_by_field(b, field);
        if ascending {
            cmp
        } else {
            cmp.reverse()
        }
    });
}

/// Sort indicator for a table header cell.
pub fn get_sort_indicator(current_field: &str, field: &str, ascending: bool) -> &'static str {
    if current_field == field {
        if ascending {
            " ▲"
        } else {
            " ▼"
        }
    } else {
        " ⇅"
    }
}

/// CSS class for a sortable header's indicator span.
pub fn get_sort_class(current_field: &str, field: &str) -> &'static str {
    if current_field == field {
        "sort-indicator sort-indicator--active"
    } else {
        "sort-indicator"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Row(&'static str, f64);

    impl Sortable for Row {
        fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
            match field {
                "name" => self.0.cmp(other.0),
                "price" => self.1.partial_cmp(&other.1).unwrap_or(Ordering::Equal),
                _ => Ordering::Equal,
            }
        }
    }

    #[test]
    fn test_sort_list() {
        let mut rows = vec![Row("b", 2.0), Row("a", 3.0), Row("c", 1.0)];
        sort_list(&mut rows, "name", true);
        assert_eq!(rows[0].0, "a");
        sort_list(&mut rows, "price", false);
        assert_eq!(rows[0].0, "a");
        assert_eq!(rows[2].0, "c");
    }

    #[test]
    fn test_sort_indicator() {
        assert_eq!(get_sort_indicator("name", "name", true), " ▲");
        assert_eq!(get_sort_indicator("name", "name", false), " ▼");
        assert_eq!(get_sort_indicator("name", "price", true), " ⇅");
    }
}
