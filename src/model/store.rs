use std::collections::BTreeMap;

use super::field::{Field, FieldValue};

/// Session-scoped accumulator for the answers given in steps 1 and 2.
///
/// Later updates overwrite earlier values for the same field; fields not
/// named in an update are left alone. Nothing here outlives the session.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormStore {
    values: BTreeMap<Field, FieldValue>,
}

impl FormStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the stored value for `field`, or `default` when unset.
    pub fn get(&self, field: Field, default: FieldValue) -> FieldValue {
        self.values.get(&field).cloned().unwrap_or(default)
    }

    /// Returns the stored text for `field`, or `""` when unset or not text.
    pub fn text(&self, field: Field) -> &str {
        self.values
            .get(&field)
            .and_then(FieldValue::as_text)
            .unwrap_or("")
    }

    /// Returns the stored decimal for `field`, or `0.0` when unset or not a decimal.
    pub fn decimal(&self, field: Field) -> f64 {
        self.values
            .get(&field)
            .and_then(FieldValue::as_decimal)
            .unwrap_or(0.0)
    }

    /// Merges the given pairs into the store.
    pub fn update<I>(&mut self, entries: I)
    where
        I: IntoIterator<Item = (Field, FieldValue)>,
    {
        self.values.extend(entries);
    }

    /// Removes every stored value.
    pub fn clear(&mut self) {
        self.values.clear();
    }

    /// Returns `true` if `field` has been stored.
    pub fn contains(&self, field: Field) -> bool {
        self.values.contains_key(&field)
    }

    /// Number of stored fields.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if nothing has been stored.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterates stored pairs in field order.
    pub fn iter(&self) -> impl Iterator<Item = (Field, &FieldValue)> {
        self.values.iter().map(|(f, v)| (*f, v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_store_is_empty() {
        let store = FormStore::new();
        assert!(store.is_empty());
        assert_eq!(store.len(), 0);
    }

    #[test]
    fn get_returns_default_when_unset() {
        let store = FormStore::new();
        assert_eq!(
            store.get(Field::Email, FieldValue::from("none")),
            FieldValue::from("none")
        );
        assert_eq!(store.text(Field::Email), "");
        assert_eq!(store.decimal(Field::Length), 0.0);
    }

    #[test]
    fn update_overwrites_and_preserves() {
        let mut store = FormStore::new();
        store.update([
            (Field::Email, "a@b.com".into()),
            (Field::LotCode, "2025/33".into()),
        ]);
        store.update([(Field::LotCode, "2025/34".into())]);
        assert_eq!(store.text(Field::Email), "a@b.com");
        assert_eq!(store.text(Field::LotCode), "2025/34");
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn typed_accessors_ignore_mismatched_kind() {
        let mut store = FormStore::new();
        store.update([(Field::Length, "long".into()), (Field::Email, 3.0.into())]);
        assert_eq!(store.decimal(Field::Length), 0.0);
        assert_eq!(store.text(Field::Email), "");
    }

    #[test]
    fn clear_empties_store() {
        let mut store = FormStore::new();
        store.update([(Field::Length, 2400.0.into())]);
        assert!(store.contains(Field::Length));
        store.clear();
        assert!(store.is_empty());
        assert!(!store.contains(Field::Length));
    }

    #[test]
    fn iter_is_in_field_order() {
        let mut store = FormStore::new();
        store.update([(Field::Length, 1.0.into()), (Field::Email, "e".into())]);
        let fields: Vec<Field> = store.iter().map(|(f, _)| f).collect();
        assert_eq!(fields, vec![Field::Email, Field::Length]);
    }
}
