//! Import and include directives of one generated file.
//!
//! Directives fall into two tiers, each holding platform imports and local
//! includes. Every one of the four sets is deduplicated and rendered sorted.
//! Generated files are compared byte for byte against earlier runs, so the
//! blank-line layout of [`ImportSet::render`] is part of the output format.

use std::collections::BTreeSet;

/// Ordering group of a directive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportTier {
    /// Framework-level directives.
    First,
    /// Project-level directives.
    Second,
}

/// Kind of directive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportKind {
    /// `#import` of a platform header.
    Import,
    /// `#include` of a core-library or standard header.
    Include,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct Tier {
    imports: BTreeSet<String>,
    includes: BTreeSet<String>,
}

impl Tier {
    fn set_mut(&mut self, kind: ImportKind) -> &mut BTreeSet<String> {
        match kind {
            ImportKind::Import => &mut self.imports,
            ImportKind::Include => &mut self.includes,
        }
    }

    fn render_into(&self, out: &mut String) {
        if !self.imports.is_empty() {
            out.push('\n');
            push_lines(out, &self.imports);
        }
        if !self.includes.is_empty() {
            // Only the imports of this tier decide the separator.
            if !self.imports.is_empty() {
                out.push('\n');
            }
            push_lines(out, &self.includes);
        }
    }
}

fn push_lines(out: &mut String, lines: &BTreeSet<String>) {
    for line in lines {
        out.push_str(line);
        out.push('\n');
    }
}

/// Directives collected while emitting one file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportSet {
    first: Tier,
    second: Tier,
}

impl ImportSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a directive. Adding the same directive twice has no effect.
    pub fn add(&mut self, tier: ImportTier, kind: ImportKind, directive: impl Into<String>) {
        let tier = match tier {
            ImportTier::First => &mut self.first,
            ImportTier::Second => &mut self.second,
        };
        tier.set_mut(kind).insert(directive.into());
    }

    pub fn with(mut self, tier: ImportTier, kind: ImportKind, directive: impl Into<String>) -> Self {
        self.add(tier, kind, directive);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.first == Tier::default() && self.second == Tier::default()
    }

    /// Render the import block.
    ///
    /// Each non-empty import set starts with a blank line. An include set is
    /// preceded by a blank line only when the import set of its own tier is
    /// non-empty.
    pub fn render(&self) -> String {
        let mut out = String::new();
        self.first.render_into(&mut out);
        self.second.render_into(&mut out);
        out
    }
}
