//! Turning raw rows into named records.

use prodfeed_model::FieldValue;

use crate::mapping::FieldMapping;
use crate::record::Record;

/// Map one raw row onto a [`Record`] by position.
///
/// Returns `None` when the row's column count does not match the mapping;
/// such rows produce no record and the caller reports them as unmappable.
pub fn map_row(mapping: &FieldMapping, row: &[String]) -> Option<Record> {
    if row.len() != mapping.len() {
        return None;
    }
    let mut record = Record::new();
    for (position, field) in mapping.entries() {
        record.insert(field, FieldValue::Text(row[position].clone()));
    }
    Some(record)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|cell| (*cell).to_string()).collect()
    }

    #[test]
    fn test_maps_cells_by_position() {
        let mapping = FieldMapping::new(["Code", "Name", "Stock"]).unwrap();
        let record = map_row(&mapping, &row(&["P0001", "TV", "20"])).unwrap();

        assert_eq!(record.len(), 3);
        assert_eq!(record.text("Code"), Some("P0001"));
        assert_eq!(record.text("Name"), Some("TV"));
        assert_eq!(record.text("Stock"), Some("20"));
    }

    #[test]
    fn test_too_few_columns_is_unmappable() {
        let mapping = FieldMapping::new(["Code", "Name", "Stock"]).unwrap();
        assert_eq!(map_row(&mapping, &row(&["P0001", "TV"])), None);
    }

    #[test]
    fn test_too_many_columns_is_unmappable() {
        let mapping = FieldMapping::new(["Code", "Name"]).unwrap();
        assert_eq!(map_row(&mapping, &row(&["P0001", "TV", "20"])), None);
    }

    #[test]
    fn test_empty_cells_map_to_empty_text() {
        let mapping = FieldMapping::new(["Code", "Discontinued"]).unwrap();
        let record = map_row(&mapping, &row(&["P0001", ""])).unwrap();
        assert_eq!(record.text("Discontinued"), Some(""));
    }
}
