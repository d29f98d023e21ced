// This file is the module declaration file for the `core` module.
// It declares the submodules that hold the scanning pipeline, in
// dependency order: lines come out of `reader`, blocks come out of
// `scanner`, and `registry` groups the blocks by type.

// `reader` module:
// This module loads a terraform file into an ordered vector of lines,
// one entry per line, with line terminators stripped. It owns the only
// error type the core raises: a distinct `ReadError` for open/read
// failures and for single lines exceeding the length bound. The scanner
// is never invoked when the reader fails.
pub mod reader;

// `scanner` module:
// This is the algorithmic heart of the crate. It walks the line
// sequence once, tracking brace depth, and cuts the input into
// top-level balanced-brace `Block`s, each classified by a
// (type, name) pair taken from its opening line.
pub mod scanner;

// `registry` module:
// This module folds the scanned blocks into a `BlockRegistry`, a map
// from block type to either an ordered list (the reserved `locals`
// type, whose blocks carry no name) or a name-to-lines map with
// last-write-wins semantics. The registry is built once per command
// invocation and read-only afterwards.
pub mod registry;
