use std::path::Path;

use tracing::debug;

use crate::ast::SanitizedGroup;
use crate::error::{DumpError, DumpResult};
use crate::parser::DumpParser;
use crate::sanitizer::sanitize;
use crate::tree::{Node, build_tree};

/// Nesting depth accepted by [`Processor::new`].
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Output of one pass over a dump
#[derive(Debug, Clone, PartialEq)]
pub struct Processed<'a> {
    /// The dump's labels and nesting, markers removed
    pub sanitized: SanitizedGroup<'a>,
    pub tree: Node,
}

/// Runs a dump through tokenizing, nesting, sanitizing and tree building
#[derive(Debug, Clone)]
pub struct Processor {
    max_depth: usize,
}

impl Default for Processor {
    fn default() -> Self {
        Self::new()
    }
}

impl Processor {
    pub fn new() -> Self {
        Self::with_max_depth(DEFAULT_MAX_DEPTH)
    }

    pub fn with_max_depth(max_depth: usize) -> Self {
        Self { max_depth }
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Rebuild the tree described by `input`.
    pub fn process<'a>(&self, input: &'a str) -> DumpResult<Processed<'a>> {
        let tokens = DumpParser::tokenize(input)?;
        debug!(tokens = tokens.len(), "tokenized dump");

        let group = DumpParser::parse_groups(&tokens, self.max_depth)?;
        let sanitized = sanitize(&group);
        debug!(labels = sanitized.label_count(), "sanitized groups");

        let tree = build_tree(&sanitized)?;
        debug!(
            nodes = tree.node_count(),
            height = tree.height(),
            "built tree"
        );

        Ok(Processed { sanitized, tree })
    }
}

/// Read a dump file whole.
pub fn read_dump(path: impl AsRef<Path>) -> DumpResult<String> {
    let path = path.as_ref();
    let source = std::fs::read_to_string(path).map_err(|source| DumpError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), bytes = source.len(), "read dump");
    Ok(source)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::io::Write;

    #[test]
    fn test_process_program() {
        let processed = Processor::new()
            .process("Program(Fundecl(void,f,Block(VarDecl(INT, a), Stmt())))")
            .unwrap();

        assert_eq!(
            processed.sanitized.to_string(),
            "[Program, [Fundecl, [void, f, Block, [VarDecl, [INT, a], Stmt, []]]]]"
        );
        assert_eq!(processed.tree.name(), "Program");
        assert_eq!(processed.tree.node_count(), 9);
    }

    #[rstest]
    #[case("A(B,C")]
    #[case("A(B))")]
    #[case(")A(")]
    #[case("")]
    #[case("(A)")]
    fn test_process_malformed(#[case] input: &str) {
        let err = Processor::new().process(input).unwrap_err();
        assert!(err.is_malformed_input(), "{input:?} gave {err}");
    }

    #[test]
    fn test_process_respects_max_depth() {
        let input = "A(B(C(D(E))))";
        assert!(Processor::with_max_depth(4).process(input).is_ok());
        assert!(matches!(
            Processor::with_max_depth(3).process(input),
            Err(DumpError::NestingTooDeep { limit: 3 })
        ));
    }

    #[test]
    fn test_process_deep_nesting_within_default_limit() {
        let depth = DEFAULT_MAX_DEPTH;
        let input = format!("{}x{}", "N(".repeat(depth), ")".repeat(depth));
        let tree = Processor::new().process(&input).unwrap().tree;
        assert_eq!(tree.height(), depth);
    }

    #[test]
    fn test_read_dump_multiline() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            "Program(\n  Fundecl(\n    void,\n    f,\n    Block(\n      VarDecl(INT, a),\n      Stmt()\n    )\n  )\n)\n"
        )
        .unwrap();

        let source = read_dump(file.path()).unwrap();
        let from_file = Processor::new().process(&source).unwrap().tree;
        let inline = Processor::new()
            .process("Program(Fundecl(void,f,Block(VarDecl(INT,a),Stmt())))")
            .unwrap()
            .tree;
        assert_eq!(from_file, inline);
    }

    #[test]
    fn test_read_dump_missing() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_dump(dir.path().join("ast.c-ast")).unwrap_err();
        assert!(matches!(err, DumpError::Read { .. }));
        assert!(!err.is_malformed_input());
    }
}
