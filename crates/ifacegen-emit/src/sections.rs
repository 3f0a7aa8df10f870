//! Assembly of member groups into text blocks.

/// How members inside one group are separated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemberSpacing {
    /// One member per line (declarations).
    Compact,
    /// A blank line between members (definitions).
    Spaced,
}

/// Members of one visibility section, in emission order.
///
/// Each member is a complete chunk of text ending in a newline.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Surface {
    pub constructors: Vec<String>,
    pub operators: Vec<String>,
    pub methods: Vec<String>,
    pub functions: Vec<String>,
}

impl Surface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.groups().iter().all(|g| g.is_empty())
    }

    fn groups(&self) -> [&Vec<String>; 4] {
        [&self.constructors, &self.operators, &self.methods, &self.functions]
    }

    /// Render the groups, one blank line apart. Empty groups leave no trace.
    pub fn render(&self, spacing: MemberSpacing) -> String {
        let separator = match spacing {
            MemberSpacing::Compact => "",
            MemberSpacing::Spaced => "\n",
        };
        join_blocks(self.groups().iter().map(|g| g.join(separator)))
    }
}

/// Join non-empty blocks with a single blank line.
pub fn join_blocks<I>(blocks: I) -> String
where
    I: IntoIterator<Item = String>,
{
    blocks
        .into_iter()
        .filter(|b| !b.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_surface() {
        let surface = Surface::new();
        assert!(surface.is_empty());
        assert_eq!(surface.render(MemberSpacing::Spaced), "");
    }

    #[test]
    fn groups_are_one_blank_line_apart() {
        let surface = Surface {
            constructors: vec!["ctor;\n".into()],
            operators: vec![],
            methods: vec!["a;\n".into(), "b;\n".into()],
            functions: vec!["f;\n".into()],
        };

        assert_eq!(surface.render(MemberSpacing::Compact), "ctor;\n\na;\nb;\n\nf;\n");
        assert_eq!(surface.render(MemberSpacing::Spaced), "ctor;\n\na;\n\nb;\n\nf;\n");
    }

    #[test]
    fn leading_empty_groups_add_no_separator() {
        let surface = Surface {
            methods: vec!["m;\n".into()],
            ..Surface::default()
        };
        assert_eq!(surface.render(MemberSpacing::Compact), "m;\n");
    }
}
