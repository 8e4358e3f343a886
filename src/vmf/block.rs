//! The in-memory block tree produced by the parser.

use hashbrown::HashMap;
use std::fmt::{self, Display, Write};

/// One `name { ... }` block: its quoted key/value pairs and nested blocks.
///
/// Blocks are built once by the parser and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Block {
    pub name: String,
    /// Keys are unique within a block; the last occurrence in the file wins.
    pub properties: HashMap<String, String>,
    /// Nested blocks in file order.
    pub children: Vec<Block>,
}

/// Known block names, decoded once so callers can `match` instead of comparing strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    VersionInfo,
    VisGroups,
    ViewSettings,
    World,
    Entity,
    Hidden,
    Cameras,
    Cordon,
    Editor,
    Solid,
    Side,
    Unknown,
}

impl BlockKind {
    pub fn from_name(name: &str) -> Self {
        match name {
            "versioninfo" => Self::VersionInfo,
            "visgroups" => Self::VisGroups,
            "viewsettings" => Self::ViewSettings,
            "world" => Self::World,
            "entity" => Self::Entity,
            "hidden" => Self::Hidden,
            "cameras" => Self::Cameras,
            "cordon" => Self::Cordon,
            "editor" => Self::Editor,
            "solid" => Self::Solid,
            "side" => Self::Side,
            _ => Self::Unknown,
        }
    }
}

impl Block {
    pub fn new(name: impl Into<String>) -> Self {
        Block {
            name: name.into(),
            properties: HashMap::new(),
            children: Vec::new(),
        }
    }

    /// Builder-style property insertion; replaces an existing value for `key`.
    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }

    /// Builder-style child insertion.
    pub fn with_child(mut self, child: Block) -> Self {
        self.children.push(child);
        self
    }

    pub fn kind(&self) -> BlockKind {
        BlockKind::from_name(&self.name)
    }

    pub fn property(&self, key: &str) -> Option<&str> {
        self.properties.get(key).map(String::as_str)
    }

    /// Children whose name is exactly `name`, in file order.
    pub fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Block> + 'a {
        self.children.iter().filter(move |child| child.name == name)
    }

    /// Serialize this block (and its subtree) back to VMF text.
    ///
    /// Keys are written in sorted order so the output is stable.
    pub fn to_vmf_string(&self) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail.
        let _ = self.write_indented(&mut out, 0);
        out
    }

    fn write_indented<W: Write>(&self, out: &mut W, depth: usize) -> fmt::Result {
        let indent = "\t".repeat(depth);
        writeln!(out, "{indent}{}", self.name)?;
        writeln!(out, "{indent}{{")?;

        let mut keys: Vec<&String> = self.properties.keys().collect();
        keys.sort();
        for key in keys {
            writeln!(
                out,
                "{indent}\t\"{}\" \"{}\"",
                escape(key),
                escape(&self.properties[key])
            )?;
        }
        for child in &self.children {
            child.write_indented(out, depth + 1)?;
        }

        writeln!(out, "{indent}}}")
    }
}

impl Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_indented(f, 0)
    }
}

/// Backslash-escape `"` and `\` so the parser reads the text back verbatim.
fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if c == '"' || c == '\\' {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
