// crates/zk-image-cli/src/commands/mod.rs - Command Handler Modules
//
// One module per subcommand:
// - insert: ingest an image from disk or a URL
// - search: substring search over descriptions and sources
// - delete: remove a row and its image file
// - completions: shell completion scripts (no notebook needed)

#[cfg(feature = "completions")]
pub mod completions;
pub mod delete;
pub mod insert;
pub mod search;
