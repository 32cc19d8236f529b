//! # Attributed Tree Documentation
//!
//! This crate reads, queries and writes the XML documents stored inside **DMXControl** project
//! archives (`.dmz`). Every document in an archive shares one generic shape: a tree of
//! `TreeItem` elements whose data lives in nested `Attribute` records.
//!
//! ## Document Structure
//!
//! ```xml
//! <?xml version="1.0" encoding="utf-8"?>
//! <TreeItem Name="TimecodeShows">
//!   <TreeItem Name="TimecodeShow">
//!     <Attribute Name="Name" Type="Primitive" ValueType="String" Value="Intro" />
//!     <Attribute Name="ID" Type="Primitive" ValueType="String" Value="5b037e3b-..." />
//!     <Attribute Name="Number" Type="Primitive" ValueType="UInt32" Value="1" />
//!   </TreeItem>
//! </TreeItem>
//! ```
//!
//! ### Elements
//!
//! | Element     | XML attributes                         | Description                                   |
//! |-------------|----------------------------------------|-----------------------------------------------|
//! | `TreeItem`  | `Name`                                 | A node, `Name` identifies its role            |
//! | `Attribute` | `Name`, `Type`, `ValueType`, `Value`   | A typed value attached to the enclosing node  |
//!
//! ### Value Types
//!
//! Values are always stored as strings. The `ValueType` names the type the value is parsed as:
//!
//! - **String**: Free text, also used for GUIDs
//! - **Int32**: Signed 32-bit integer, e.g. `ZZ_SAVE_INDEX` and `Index`
//! - **UInt32**: Unsigned 32-bit integer, e.g. `Number`
//! - **Boolean**: `true` or `false`
//!
//! ## Lookup Rules
//!
//! - Node and attribute names are compared ignoring ASCII case
//! - [`TreeNode::attribute_value`] prefers a direct attribute of the node, and only falls back to
//!   the first matching attribute among its descendants in document order
//! - [`Document::find_nodes`] considers the root itself as well as every descendant
//!
//! ## Additional Information
//!
//! - **Encoding**: UTF-8, a leading byte order mark is accepted when reading
//! - **Text content**: Ignored, it never carries data in this format
//!

pub mod error;
pub mod node;
pub mod read;
pub mod write;

pub use node::{Attribute, Descendants, Document, TreeNode, ATTRIBUTE, PRIMITIVE, TREE_ITEM};
