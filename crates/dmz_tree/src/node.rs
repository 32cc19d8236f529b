//! Base types for the attributed tree shape.

/// Element name used for every structural node
pub const TREE_ITEM: &str = "TreeItem";

/// Element name used for attribute records
pub const ATTRIBUTE: &str = "Attribute";

/// `Type` used by scalar attributes
pub const PRIMITIVE: &str = "Primitive";

/// An `<Attribute>` record attached to a [`TreeNode`]
///
/// Records carry a name, a declared `Type`, a declared `ValueType` and the value as a string.
/// Complex attributes may nest further nodes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attribute {
    /// The `Name` of the attribute
    pub name: String,

    /// The declared `Type`, usually [`PRIMITIVE`]
    pub kind: String,

    /// The declared `ValueType`, e.g. `String`, `Int32` or `Boolean`
    pub value_type: String,

    /// The raw `Value`
    pub value: String,

    /// Nodes nested inside the attribute element
    pub children: Vec<TreeNode>,
}

impl Attribute {
    pub fn new(
        name: impl Into<String>,
        kind: impl Into<String>,
        value_type: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            kind: kind.into(),
            value_type: value_type.into(),
            value: value.into(),
            children: Vec::new(),
        }
    }

    /// Creates a scalar attribute with the [`PRIMITIVE`] type
    pub fn primitive(
        name: impl Into<String>,
        value_type: impl Into<String>,
        value: impl ToString,
    ) -> Self {
        Self::new(name, PRIMITIVE, value_type, value.to_string())
    }

    /// Whether this attribute is called `name`, ignoring ASCII case
    pub fn is(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name)
    }
}

/// A node of the generic tree
///
/// Every XML file inside a project archive is a tree of these. The `Name` property identifies
/// what the node is (`TimecodeShow`, `Branch`, `SceneList`, ...), the [`Attribute`] records hold
/// its data and `children` holds nested nodes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TreeNode {
    /// The element name, [`TREE_ITEM`] in practice
    pub tag: String,

    /// XML attributes of the element itself, in document order
    pub properties: Vec<(String, String)>,

    /// Attribute records, in document order
    pub attributes: Vec<Attribute>,

    /// Nested nodes, in document order
    pub children: Vec<TreeNode>,
}

impl TreeNode {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Default::default()
        }
    }

    /// Creates a [`TREE_ITEM`] node with the given `Name`
    pub fn item(name: impl Into<String>) -> Self {
        Self {
            tag: TREE_ITEM.into(),
            properties: vec![("Name".into(), name.into())],
            ..Default::default()
        }
    }

    pub fn with_attribute(mut self, attribute: Attribute) -> Self {
        self.attributes.push(attribute);
        self
    }

    pub fn with_child(mut self, child: TreeNode) -> Self {
        self.children.push(child);
        self
    }

    /// The `Name` property, empty if the element has none
    pub fn name(&self) -> &str {
        self.property("Name").unwrap_or_default()
    }

    /// Whether this is a [`TREE_ITEM`] called `name`, ignoring ASCII case
    ///
    /// Other elements, such as an `Attribute` nested in another attribute, never match.
    pub fn is(&self, name: &str) -> bool {
        self.tag == TREE_ITEM && self.name().eq_ignore_ascii_case(name)
    }

    pub fn property(&self, key: &str) -> Option<&str> {
        self.properties
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Direct attribute record by name
    pub fn attribute(&self, name: &str) -> Option<&Attribute> {
        self.attributes.iter().find(|a| a.is(name))
    }

    pub fn attribute_mut(&mut self, name: &str) -> Option<&mut Attribute> {
        self.attributes.iter_mut().find(|a| a.is(name))
    }

    /// Reads the value of the attribute called `name`
    ///
    /// A direct attribute always wins, even over a nested attribute of the same name. Only when
    /// the node has no direct match are its descendants searched, in document order.
    pub fn attribute_value(&self, name: &str) -> Option<&str> {
        if let Some(direct) = self.attribute(name) {
            return Some(&direct.value);
        }

        self.descendants()
            .find_map(|node| node.attribute(name))
            .map(|a| a.value.as_str())
    }

    /// Rewrites the value of a direct attribute, returning whether one was found
    pub fn set_attribute_value(&mut self, name: &str, value: impl ToString) -> bool {
        match self.attribute_mut(name) {
            Some(attribute) => {
                attribute.value = value.to_string();
                true
            }
            None => false,
        }
    }

    /// Iterates all nodes below this one, depth first in document order
    pub fn descendants(&self) -> Descendants<'_> {
        Descendants::new(self)
    }

    /// Iterates this node and its descendants that are called `name`
    pub fn find_nodes<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a TreeNode> + 'a {
        std::iter::once(self)
            .chain(self.descendants())
            .filter(move |node| node.is(name))
    }

    pub fn find_node(&self, name: &str) -> Option<&TreeNode> {
        std::iter::once(self)
            .chain(self.descendants())
            .find(|node| node.is(name))
    }

    pub fn find_node_mut(&mut self, name: &str) -> Option<&mut TreeNode> {
        self.find_node_mut_by(&|node: &TreeNode| node.is(name))
    }

    /// First node, this one included, matching `predicate` in document order
    pub fn find_node_mut_by<F>(&mut self, predicate: &F) -> Option<&mut TreeNode>
    where
        F: Fn(&TreeNode) -> bool,
    {
        if predicate(&*self) {
            return Some(self);
        }

        for attribute in &mut self.attributes {
            for child in &mut attribute.children {
                if let Some(found) = child.find_node_mut_by(predicate) {
                    return Some(found);
                }
            }
        }

        for child in &mut self.children {
            if let Some(found) = child.find_node_mut_by(predicate) {
                return Some(found);
            }
        }

        None
    }

    /// Direct children called `name`
    pub fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a TreeNode> + 'a {
        self.children.iter().filter(move |node| node.is(name))
    }

    pub fn push_child(&mut self, child: TreeNode) {
        self.children.push(child);
    }

    /// Removes every descendant called `name`, returning how many were removed
    pub fn remove_nodes(&mut self, name: &str) -> usize {
        let before = self.children.len();
        self.children.retain(|child| !child.is(name));

        let mut removed = before - self.children.len();
        for child in &mut self.children {
            removed += child.remove_nodes(name);
        }

        removed
    }
}

/// Depth first iterator over the descendants of a [`TreeNode`]
///
/// Nodes nested in attribute records are visited before the regular children, matching the
/// order they are written in.
pub struct Descendants<'a> {
    stack: Vec<&'a TreeNode>,
}

impl<'a> Descendants<'a> {
    fn new(node: &'a TreeNode) -> Self {
        let mut descendants = Self { stack: Vec::new() };
        descendants.push_children(node);
        descendants
    }

    fn push_children(&mut self, node: &'a TreeNode) {
        self.stack.extend(node.children.iter().rev());
        self.stack.extend(
            node.attributes
                .iter()
                .rev()
                .flat_map(|attribute| attribute.children.iter().rev()),
        );
    }
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a TreeNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_children(node);
        Some(node)
    }
}

/// A parsed XML file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub root: TreeNode,
}

impl Document {
    pub fn new(root: TreeNode) -> Self {
        Self { root }
    }

    /// Nodes called `name` anywhere in the document, the root included
    pub fn find_nodes<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a TreeNode> + 'a {
        self.root.find_nodes(name)
    }

    pub fn find_node(&self, name: &str) -> Option<&TreeNode> {
        self.root.find_node(name)
    }

    pub fn find_node_mut(&mut self, name: &str) -> Option<&mut TreeNode> {
        self.root.find_node_mut(name)
    }
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use super::{Attribute, TreeNode, ATTRIBUTE};

    fn show() -> TreeNode {
        TreeNode::item("TimecodeShow")
            .with_attribute(Attribute::primitive("ID", "String", "direct"))
            .with_child(
                TreeNode::item("Tracks").with_child(
                    TreeNode::item("SoundFile")
                        .with_attribute(Attribute::primitive("ID", "String", "nested"))
                        .with_attribute(Attribute::primitive("SoundFileName", "String", "a.mp3")),
                ),
            )
    }

    #[test]
    fn direct_attribute_shadows_nested() {
        assert_eq!(show().attribute_value("ID"), Some("direct"));
    }

    #[test]
    fn nested_attribute_used_without_direct() {
        let node = show();
        assert_eq!(node.attribute_value("SoundFileName"), Some("a.mp3"));
        assert_eq!(node.attribute_value("soundfilename"), Some("a.mp3"));
        assert_eq!(node.attribute_value("Missing"), None);
    }

    #[test]
    fn empty_direct_attribute_still_shadows() {
        let mut node = show();
        node.set_attribute_value("ID", "");
        assert_eq!(node.attribute_value("ID"), Some(""));
    }

    #[test]
    fn find_nodes_in_document_order() {
        let root = TreeNode::item("Root")
            .with_child(TreeNode::item("A").with_child(TreeNode::item("Leaf").with_attribute(
                Attribute::primitive("Number", "Int32", 1),
            )))
            .with_child(TreeNode::item("Leaf").with_attribute(Attribute::primitive(
                "Number", "Int32", 2,
            )));

        let numbers = root
            .find_nodes("leaf")
            .filter_map(|n| n.attribute_value("Number"))
            .collect::<Vec<_>>();
        assert_eq!(numbers, vec!["1", "2"]);
        assert_eq!(root.find_nodes("Root").count(), 1);
    }

    #[test]
    fn descendants_visit_attribute_children_first() {
        let mut complex = Attribute::new("Complex", "Complex", "Object", "");
        complex.children.push(TreeNode::item("Inner"));
        let root = TreeNode::item("Root")
            .with_attribute(complex)
            .with_child(TreeNode::item("Outer"));

        let names = root.descendants().map(|n| n.name()).collect::<Vec<_>>();
        assert_eq!(names, vec!["Inner", "Outer"]);
    }

    #[test]
    fn find_node_mut_and_remove() {
        let mut root = TreeNode::item("Root")
            .with_child(TreeNode::item("Resources").with_child(TreeNode::item("a.mp3")))
            .with_child(TreeNode::item("a.mp3"));

        root.find_node_mut("Resources")
            .expect("section exists")
            .push_child(TreeNode::item("b.mp3"));

        assert_eq!(root.remove_nodes("A.MP3"), 2);
        assert_eq!(root.find_nodes("b.mp3").count(), 1);
        assert_eq!(root.children.len(), 1);
    }

    #[test]
    fn only_tree_items_match_names() {
        let mut stray = TreeNode::new(ATTRIBUTE);
        stray.properties.push(("Name".into(), "SceneList".into()));
        let root = TreeNode::item("Root")
            .with_child(stray)
            .with_child(TreeNode::item("SceneList"));

        assert!(!root.children[0].is("SceneList"));
        assert_eq!(root.find_nodes("SceneList").count(), 1);
        assert_eq!(root.children_named("SceneList").count(), 1);
    }
}
