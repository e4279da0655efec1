use std::collections::BTreeMap;

use super::list::ListItem;

/// One rendered line of a list projection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Row {
    /// Non-selectable group header, e.g. `src/tui/`
    Header { label: String },
    /// A selectable item, pointing back at its original index
    Item {
        index: usize,
        label: String,
        indent: usize,
    },
}

impl Row {
    pub fn item_index(&self) -> Option<usize> {
        match self {
            Row::Item { index, .. } => Some(*index),
            Row::Header { .. } => None,
        }
    }
}

/// A render-ordered row sequence plus the mapping between render rows and
/// original item indices.
#[derive(Debug, Clone, Default)]
pub struct Projection {
    rows: Vec<Row>,
    /// `row_of[item] = row position`
    row_of: Vec<usize>,
}

impl Projection {
    /// Identity projection: row `i` is item `i`.
    pub fn flat<I: ListItem>(items: &[I]) -> Self {
        let rows = items
            .iter()
            .enumerate()
            .map(|(index, item)| Row::Item {
                index,
                label: item.display().to_string(),
                indent: 0,
            })
            .collect();
        Projection {
            rows,
            row_of: (0..items.len()).collect(),
        }
    }

    /// Two-level projection: items partitioned by group key, groups in key
    /// order (keyless items first, without a header), items within a group
    /// ordered by display string.
    pub fn grouped<I: ListItem>(items: &[I]) -> Self {
        let mut groups: BTreeMap<Option<&str>, Vec<usize>> = BTreeMap::new();
        for (index, item) in items.iter().enumerate() {
            groups.entry(item.group_key()).or_default().push(index);
        }

        let mut rows = Vec::with_capacity(items.len() + groups.len());
        let mut row_of = vec![0; items.len()];

        for (key, mut members) in groups {
            members.sort_by(|&a, &b| items[a].display().cmp(items[b].display()).then(a.cmp(&b)));

            let indent = match key {
                Some(key) => {
                    rows.push(Row::Header {
                        label: format!("{}/", key),
                    });
                    1
                }
                None => 0,
            };

            for index in members {
                row_of[index] = rows.len();
                rows.push(Row::Item {
                    index,
                    label: items[index].leaf_label().to_string(),
                    indent,
                });
            }
        }

        Projection { rows, row_of }
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Render row of an original item index.
    pub fn row_of(&self, index: usize) -> Option<usize> {
        self.row_of.get(index).copied()
    }

    /// Original item index at a render row (`None` for headers).
    pub fn item_at(&self, row: usize) -> Option<usize> {
        self.rows.get(row).and_then(Row::item_index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    struct Path(&'static str);

    impl ListItem for Path {
        fn display(&self) -> &str {
            self.0
        }

        fn group_key(&self) -> Option<&str> {
            self.0.rsplit_once('/').map(|(dir, _)| dir)
        }

        fn leaf_label(&self) -> &str {
            self.0.rsplit_once('/').map_or(self.0, |(_, name)| name)
        }
    }

    fn labels(p: &Projection) -> Vec<String> {
        p.rows()
            .iter()
            .map(|row| match row {
                Row::Header { label } => format!("# {}", label),
                Row::Item { label, indent, .. } => format!("{}{}", "  ".repeat(*indent), label),
            })
            .collect()
    }

    #[test]
    fn flat_is_identity() {
        let items = [Path("b.rs"), Path("a/x.rs"), Path("c.rs")];
        let p = Projection::flat(&items);
        assert_eq!(p.rows().len(), 3);
        for i in 0..3 {
            assert_eq!(p.row_of(i), Some(i));
            assert_eq!(p.item_at(i), Some(i));
        }
    }

    #[test]
    fn grouped_orders_groups_and_members() {
        let items = [
            Path("src/tui/b.rs"),
            Path("README.md"),
            Path("src/main.rs"),
            Path("src/tui/a.rs"),
            Path("Cargo.toml"),
        ];
        let p = Projection::grouped(&items);
        assert_eq!(
            labels(&p),
            vec![
                "Cargo.toml",
                "README.md",
                "# src/",
                "  main.rs",
                "# src/tui/",
                "  a.rs",
                "  b.rs",
            ]
        );
    }

    #[test]
    fn grouped_mapping_is_bidirectional() {
        let items = [
            Path("src/tui/b.rs"),
            Path("README.md"),
            Path("src/main.rs"),
            Path("src/tui/a.rs"),
        ];
        let p = Projection::grouped(&items);
        for index in 0..items.len() {
            let row = p.row_of(index).unwrap();
            assert_eq!(p.item_at(row), Some(index));
        }
        // Headers map to no item
        assert_eq!(p.item_at(1), None);
        assert_eq!(p.item_at(99), None);
        assert_eq!(p.row_of(99), None);
    }

    #[test]
    fn grouped_without_keys_has_no_headers() {
        let items = [Path("b"), Path("a")];
        let p = Projection::grouped(&items);
        assert_eq!(labels(&p), vec!["a", "b"]);
        assert_eq!(p.row_of(0), Some(1));
    }
}
