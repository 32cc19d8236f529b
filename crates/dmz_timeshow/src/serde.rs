//! Serde support for tree fragments, which travel as their XML text.

pub(crate) mod fragment {
    use dmz_tree::TreeNode;
    use serde::{de::Error as _, ser::Error as _, Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(node: &TreeNode, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let xml = node.to_xml_string().map_err(S::Error::custom)?;
        serializer.serialize_str(&xml)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<TreeNode, D::Error>
    where
        D: Deserializer<'de>,
    {
        let xml = String::deserialize(deserializer)?;
        TreeNode::parse_fragment(&xml).map_err(D::Error::custom)
    }
}
