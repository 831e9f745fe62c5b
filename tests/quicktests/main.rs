mod list;
mod tree;
