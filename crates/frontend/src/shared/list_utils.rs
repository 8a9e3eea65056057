/// Универсальные утилиты для работы со списками (сравнение, устойчивая сортировка, поиск)
use contracts::shared::list::{SortDirection, SortSpec};
use contracts::shared::record::{FieldValue, Record};
use leptos::prelude::*;
use std::cmp::Ordering;

/// Сравнивает два значения поля.
///
/// Числа сравниваются численно (`Int` с `Float`: через `f64`), строки:
/// лексикографически с учетом регистра, `false < true`. Разные типы, NaN и
/// отсутствующие значения считаются равными.
pub fn compare_field_values(a: Option<&FieldValue>, b: Option<&FieldValue>) -> Ordering {
    match (a, b) {
        (Some(FieldValue::Int(x)), Some(FieldValue::Int(y))) => x.cmp(y),
        (Some(FieldValue::Text(x)), Some(FieldValue::Text(y))) => x.cmp(y),
        (Some(FieldValue::Bool(x)), Some(FieldValue::Bool(y))) => x.cmp(y),
        (Some(x), Some(y)) => match (x.as_f64(), y.as_f64()) {
            (Some(x), Some(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
            _ => Ordering::Equal,
        },
        _ => Ordering::Equal,
    }
}

/// Builds the comparator for a sort spec. Unknown keys compare equal.
pub fn comparator<T: Record>(spec: &SortSpec) -> impl Fn(&T, &T) -> Ordering {
    let key = spec.key.clone();
    let direction = spec.direction;
    move |a, b| {
        let cmp = compare_field_values(a.field(&key).as_ref(), b.field(&key).as_ref());
        match direction {
            SortDirection::Asc => cmp,
            SortDirection::Desc => cmp.reverse(),
        }
    }
}

/// Устойчиво сортирует список: при равных ключах порядок исходного списка сохраняется.
pub fn stable_sort<T: Record>(items: Vec<T>, spec: &SortSpec) -> Vec<T> {
    let cmp = comparator::<T>(spec);
    // Индекс: последний критерий, поэтому порядок не зависит от алгоритма сортировки
    let mut decorated: Vec<(usize, T)> = items.into_iter().enumerate().collect();
    decorated.sort_unstable_by(|(ia, a), (ib, b)| cmp(a, b).then(ia.cmp(ib)));
    decorated.into_iter().map(|(_, item)| item).collect()
}

/// Фильтрует список по поисковому запросу (без учета регистра, по `search_text`)
pub fn filter_list<T: Record>(items: Vec<T>, filter: &str) -> Vec<T> {
    let term = filter.trim().to_lowercase();
    if term.is_empty() {
        return items;
    }
    items
        .into_iter()
        .filter(|item| item.search_text().to_lowercase().contains(&term))
        .collect()
}

/// Подсветка совпадений в тексте (case-insensitive)
pub fn highlight_matches(text: &str, filter: &str) -> AnyView {
    let filter = filter.trim();
    if filter.is_empty() {
        return view! { <span>{text.to_string()}</span> }.into_any();
    }

    let filter_lower = filter.to_lowercase();
    let text_lower = text.to_lowercase();

    // Смещения байтов совпадают только если lowercase не меняет длину
    if text_lower.len() != text.len() || !text_lower.contains(&filter_lower) {
        return view! { <span>{text.to_string()}</span> }.into_any();
    }

    let mut parts: Vec<AnyView> = Vec::new();
    let mut last_pos = 0;

    while let Some(pos) = text_lower[last_pos..].find(&filter_lower) {
        let actual_pos = last_pos + pos;

        if actual_pos > last_pos {
            parts.push(view! { <span>{text[last_pos..actual_pos].to_string()}</span> }.into_any());
        }

        let match_end = actual_pos + filter_lower.len();
        parts.push(
            view! { <mark class="search-highlight">{text[actual_pos..match_end].to_string()}</mark> }
                .into_any(),
        );

        last_pos = match_end;
    }

    if last_pos < text.len() {
        parts.push(view! { <span>{text[last_pos..].to_string()}</span> }.into_any());
    }

    view! { <>{parts}</> }.into_any()
}

/// Получить индикатор сортировки для заголовка
pub fn get_sort_indicator(current: &SortSpec, field: &str) -> &'static str {
    if current.key == field {
        if current.direction.is_ascending() {
            " ▲"
        } else {
            " ▼"
        }
    } else {
        " ⇅"
    }
}

/// CSS-класс индикатора сортировки
pub fn get_sort_class(current: &SortSpec, field: &str) -> &'static str {
    if current.key == field {
        "sort-indicator sort-indicator--active"
    } else {
        "sort-indicator"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::record::RecordId;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        id: i64,
        name: &'static str,
        price: f64,
    }

    impl Record for Row {
        fn record_id(&self) -> RecordId {
            RecordId::Int(self.id)
        }

        fn field(&self, name: &str) -> Option<FieldValue> {
            match name {
                "id" => Some(self.id.into()),
                "name" => Some(self.name.into()),
                "price" => Some(self.price.into()),
                _ => None,
            }
        }
    }

    fn row(id: i64, name: &'static str, price: f64) -> Row {
        Row { id, name, price }
    }

    fn ids(rows: &[Row]) -> Vec<i64> {
        rows.iter().map(|r| r.id).collect()
    }

    #[test]
    fn test_numeric_fields_compare_numerically() {
        let cmp = comparator::<Row>(&SortSpec::asc("price"));
        // "10" < "9" лексикографически, но не численно
        assert_eq!(cmp(&row(1, "a", 9.0), &row(2, "b", 10.0)), Ordering::Less);
        assert_eq!(cmp(&row(1, "a", 10.0), &row(2, "b", 10.0)), Ordering::Equal);
    }

    #[test]
    fn test_descending_negates_sign() {
        let a = row(1, "Banh mi", 3.0);
        let b = row(2, "Pho", 5.0);
        for key in ["id", "name", "price"] {
            let asc = comparator::<Row>(&SortSpec::asc(key));
            let desc = comparator::<Row>(&SortSpec::desc(key));
            assert_eq!(asc(&a, &b), desc(&a, &b).reverse(), "key {}", key);
            // a <= b по каждому полю
            assert_eq!(asc(&a, &b), Ordering::Less, "key {}", key);
            assert_eq!(asc(&a, &a), Ordering::Equal, "key {}", key);
        }
    }

    #[test]
    fn test_text_is_case_sensitive() {
        let cmp = comparator::<Row>(&SortSpec::asc("name"));
        // 'Z' (0x5A) < 'a' (0x61)
        assert_eq!(cmp(&row(1, "Zebra", 0.0), &row(2, "apple", 0.0)), Ordering::Less);
    }

    #[test]
    fn test_stable_sort_keeps_original_order_for_ties() {
        let rows = vec![
            row(1, "pizza", 5.0),
            row(2, "bun", 3.0),
            row(3, "pizza", 1.0),
            row(4, "bun", 9.0),
            row(5, "pizza", 2.0),
        ];
        let sorted = stable_sort(rows.clone(), &SortSpec::asc("name"));
        assert_eq!(ids(&sorted), vec![2, 4, 1, 3, 5]);

        let sorted = stable_sort(rows, &SortSpec::desc("name"));
        assert_eq!(ids(&sorted), vec![1, 3, 5, 2, 4]);
    }

    #[test]
    fn test_stable_sort_empty() {
        let sorted = stable_sort(Vec::<Row>::new(), &SortSpec::asc("name"));
        assert!(sorted.is_empty());
    }

    #[test]
    fn test_unknown_key_preserves_order() {
        let rows = vec![row(3, "c", 1.0), row(1, "a", 2.0), row(2, "b", 3.0)];
        let sorted = stable_sort(rows, &SortSpec::desc("missing"));
        assert_eq!(ids(&sorted), vec![3, 1, 2]);
    }

    #[test]
    fn test_mixed_int_float() {
        assert_eq!(
            compare_field_values(Some(&FieldValue::Int(2)), Some(&FieldValue::Float(2.5))),
            Ordering::Less
        );
        assert_eq!(
            compare_field_values(Some(&FieldValue::Int(2)), Some(&FieldValue::from("2"))),
            Ordering::Equal
        );
        assert_eq!(
            compare_field_values(Some(&FieldValue::Float(f64::NAN)), Some(&FieldValue::Float(1.0))),
            Ordering::Equal
        );
        assert_eq!(compare_field_values(None, Some(&FieldValue::Int(1))), Ordering::Equal);
    }

    #[test]
    fn test_filter_list() {
        let rows = vec![row(1, "Pizza Hut", 0.0), row(2, "Pho 24", 0.0), row(3, "pizza 4Ps", 0.0)];
        assert_eq!(ids(&filter_list(rows.clone(), "PIZZA")), vec![1, 3]);
        assert_eq!(ids(&filter_list(rows, "  ")), vec![1, 2, 3]);
    }

    #[test]
    fn test_sort_indicator() {
        let spec = SortSpec::desc("name");
        assert_eq!(get_sort_indicator(&spec, "name"), " ▼");
        assert_eq!(get_sort_indicator(&spec, "status"), " ⇅");
        assert_eq!(get_sort_class(&spec, "name"), "sort-indicator sort-indicator--active");
    }
}
