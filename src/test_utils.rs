use std::fmt::{Display, Write};

use crate::node::Node;

/// Render the subtree rooted at `n` as a Graphviz DOT digraph.
///
/// Each node is labelled with its key and cached height. Duplicate keys are
/// disambiguated by their position in a pre-order walk.
pub(crate) fn print_dot<K>(n: &Node<K>) -> String
where
    K: Display,
{
    let mut buf = String::new();

    writeln!(buf, "digraph {{").unwrap();
    writeln!(buf, r#"bgcolor = "transparent";"#).unwrap();
    writeln!(
        buf,
        r#"node [shape = record; style = filled; fontcolor = orange4; fillcolor = white;];"#
    )
    .unwrap();
    recurse(n, &mut 0, &mut buf);
    writeln!(buf, "}}").unwrap();

    buf
}

/// Emit `n` and its descendents, returning the ID assigned to `n`.
fn recurse<K, W>(n: &Node<K>, next_id: &mut usize, buf: &mut W) -> usize
where
    W: std::fmt::Write,
    K: Display,
{
    let id = *next_id;
    *next_id += 1;

    writeln!(
        buf,
        r#""n{}" [label="{} | h={}"];"#,
        id,
        n.key(),
        n.height(),
    )
    .unwrap();

    for v in [n.left(), n.right()] {
        match v {
            Some(v) => {
                let child = recurse(v, next_id, buf);
                writeln!(buf, "\"n{id}\" -> \"n{child}\" [color = \"orange1\";];").unwrap();
            }
            None => {
                let null = *next_id;
                *next_id += 1;
                writeln!(buf, "\"null_{null}\" [shape=point,style=invis];").unwrap();
                writeln!(buf, "\"n{id}\" -> \"null_{null}\" [style=invis];").unwrap();
            }
        };
    }

    id
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::Side;

    #[test]
    fn test_print_dot() {
        let mut root = Box::new(Node::new(2));
        root.set_child(Side::Left, Box::new(Node::new(1)));

        let got = print_dot(&root);

        assert!(got.starts_with("digraph {"));
        assert!(got.contains(r#""n0" [label="2 | h=2"];"#));
        assert!(got.contains(r#""n1" [label="1 | h=1"];"#));
        assert!(got.contains(r#""n0" -> "n1""#));
        assert!(got.trim_end().ends_with('}'));
    }
}
