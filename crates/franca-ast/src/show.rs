//! A deterministic pretty-printer for the AST, in the style of
//! `pycparser`'s `Node.show()`: one line per node, indentation tracks
//! depth, and the caller can toggle attribute names and source
//! coordinates independently.

use std::fmt::{self, Write};

use crate::node::Node;

impl Node {
    /// Writes this node and its full subtree into `buf`.
    ///
    /// - `offset`: leading spaces on the first line (recursive calls add 2
    ///   per level).
    /// - `attrnames`: print `name=value` instead of just `value` for attrs.
    /// - `nodenames`: print the child's slot name (e.g. `<key_type>`) next
    ///   to its kind name.
    /// - `showcoord`: append the node's `line:column` after its attributes.
    pub fn show(
        &self,
        buf: &mut impl Write,
        offset: usize,
        attrnames: bool,
        nodenames: bool,
        showcoord: bool,
    ) -> fmt::Result {
        self.show_named(buf, offset, attrnames, nodenames, showcoord, None)
    }

    fn show_named(
        &self,
        buf: &mut impl Write,
        offset: usize,
        attrnames: bool,
        nodenames: bool,
        showcoord: bool,
        slot_name: Option<&str>,
    ) -> fmt::Result {
        for _ in 0..offset {
            buf.write_char(' ')?;
        }
        buf.write_str(self.kind_name())?;
        if nodenames {
            if let Some(name) = slot_name {
                write!(buf, " <{name}>")?;
            }
        }
        buf.write_char(':')?;

        let attrs = self.attrs();
        if !attrs.is_empty() {
            let rendered: Vec<String> = attrs
                .iter()
                .map(|(key, value)| {
                    if attrnames {
                        format!("{key}={value}")
                    } else {
                        value.clone()
                    }
                })
                .collect();
            write!(buf, " {}", rendered.join(", "))?;
        }

        if showcoord {
            write!(buf, " (at {})", self.pos)?;
        }
        buf.write_char('\n')?;

        for (name, child) in self.children() {
            child.show_named(buf, offset + 2, attrnames, nodenames, showcoord, Some(name))?;
        }
        Ok(())
    }

    /// Convenience wrapper returning the rendered tree as an owned `String`.
    pub fn show_to_string(&self, attrnames: bool, nodenames: bool, showcoord: bool) -> String {
        let mut buf = String::new();
        self.show(&mut buf, 0, attrnames, nodenames, showcoord)
            .expect("writing to a String cannot fail");
        buf
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::Radix;
    use franca_common::Position;

    fn pos() -> Position {
        Position::new(3, 5)
    }

    #[test]
    fn leaf_node_renders_single_line() {
        let n = Node::id("Foo", pos());
        assert_eq!(n.show_to_string(true, false, false), "ID: name=Foo\n");
    }

    #[test]
    fn attrnames_false_omits_the_key() {
        let n = Node::id("Foo", pos());
        assert_eq!(n.show_to_string(false, false, false), "ID: Foo\n");
    }

    #[test]
    fn showcoord_appends_position() {
        let n = Node::id("Foo", pos());
        assert_eq!(n.show_to_string(true, false, true), "ID: name=Foo (at 3:5)\n");
    }

    #[test]
    fn children_are_indented_and_tagged_with_slot_name() {
        let key = Node::typename_builtin("UInt16", pos());
        let value = Node::typename_builtin("String", pos());
        let map = Node::map_decl("Scores", key, value, None, pos());
        let out = map.show_to_string(true, true, false);
        let mut lines = out.lines();
        assert_eq!(lines.next().unwrap(), "Map: name=Scores");
        assert_eq!(lines.next().unwrap(), "  Typename <key_type>: name=UInt16");
        assert_eq!(lines.next().unwrap(), "  Typename <value_type>: name=String");
        assert!(lines.next().is_none());
    }

    #[test]
    fn enumerator_without_value_has_no_value_child() {
        let e = Node::enumerator("RED", None, None, pos());
        assert_eq!(e.show_to_string(true, false, false), "Enumerator: name=RED\n");
    }

    #[test]
    fn integer_constant_shows_value_and_radix() {
        let n = Node::integer_constant("0x1A", Radix::Hex, pos());
        assert_eq!(n.show_to_string(true, false, false), "IntegerConstant: value=26, radix=hex\n");
    }
}
