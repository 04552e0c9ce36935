pub mod arguments;
pub mod selection;
pub mod selection_tree;
pub mod value;
