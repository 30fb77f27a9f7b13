use indexmap::IndexSet;

use crate::nodes::Node;

/// Collects the base tables a tree reads from.
pub struct TableResolver;

impl TableResolver {
    /// Every `RangeVar` reachable through the table-bearing edges, as
    /// `schema.relation` or `relation`, in first-seen order.
    ///
    /// Join conditions, sub-link test expressions, aliases and `INTO`
    /// targets are not visited, nor is the relation an `INSERT` writes to.
    /// `UPDATE` and `DELETE` targets are visited since they are also read.
    pub fn tables(root: &Node) -> IndexSet<String> {
        let mut tables = IndexSet::new();
        let mut stack = vec![root];

        while let Some(node) = stack.pop() {
            match node {
                Node::RangeVar(range_var) => {
                    tables.insert(range_var.qualified_name());
                }
                Node::JoinExpr(join) => {
                    stack.push(join.rarg.as_ref());
                    stack.push(join.larg.as_ref());
                }
                Node::SubLink(link) => stack.push(link.subselect.as_ref()),
                Node::InsertStmt(insert) => stack.extend(insert.read_children().into_iter().rev()),
                Node::BoolExpr(expr) => stack.extend(expr.args.iter().rev()),
                Node::Alias(_) | Node::IntoClause(_) => {}
                other => stack.extend(other.children().into_iter().rev()),
            }
        }

        tables
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::{analysis::TableResolver, nodes::Node};

    fn node(raw: serde_json::Value) -> Node {
        Node::try_from(&raw).expect("Failed to build node")
    }

    #[test]
    fn test_qualified_and_plain_names() {
        let qualified = node(json!({ "RangeVar": { "schemaname": "s", "relname": "t" } }));
        let plain = node(json!({ "RangeVar": { "relname": "t" } }));

        assert_eq!(TableResolver::tables(&qualified).into_iter().collect::<Vec<_>>(), vec!["s.t"]);
        assert_eq!(TableResolver::tables(&plain).into_iter().collect::<Vec<_>>(), vec!["t"]);
    }

    #[test]
    fn test_join_quals_are_not_visited() {
        let join = node(json!({ "JoinExpr": {
            "larg": { "RangeVar": { "relname": "a" } },
            "rarg": { "RangeVar": { "relname": "b" } },
            "quals": { "SubLink": {
                "subLinkType": 0,
                "subselect": { "SelectStmt": { "fromClause": [{ "RangeVar": { "relname": "hidden" } }] } }
            }}
        }}));

        assert_eq!(TableResolver::tables(&join).into_iter().collect::<Vec<_>>(), vec!["a", "b"]);
    }

    #[test]
    fn test_into_target_is_not_read() {
        let select = node(json!({ "SelectStmt": {
            "intoClause": { "IntoClause": { "rel": { "RangeVar": { "relname": "archive" } } } },
            "fromClause": [{ "RangeVar": { "relname": "orders" } }]
        }}));

        assert_eq!(TableResolver::tables(&select).into_iter().collect::<Vec<_>>(), vec!["orders"]);
    }

    #[test]
    fn test_duplicates_keep_first_position() {
        let select = node(json!({ "SelectStmt": { "fromClause": [
            { "RangeVar": { "relname": "b" } },
            { "RangeVar": { "relname": "a" } },
            { "RangeVar": { "relname": "b" } }
        ]}}));

        assert_eq!(TableResolver::tables(&select).into_iter().collect::<Vec<_>>(), vec!["b", "a"]);
    }
}
