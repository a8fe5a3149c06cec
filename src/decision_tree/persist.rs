//! Reads and writes the line-oriented dump of a `DecisionTree`.
//!
//! The dump is a pre-order walk of the tree.
//! A branch is written as
//! ```text
//! Feature: <word>
//! Threshold: <frequency>
//! <left subtree>
//! <right subtree>
//! ```
//! and a leaf as a single line holding its label.
//! Training documents are not part of the dump.
use log::info;

use crate::constants::{FEATURE_PREFIX, THRESHOLD_PREFIX};
use crate::error::{Error, Result};
use super::{DecisionTree, Node, Splitter};

use std::io::{self, BufRead, Write};

impl DecisionTree {
    /// Returns the dump of this tree, one entry per line.
    /// An empty tree has no lines.
    ///
    /// Labels are written as they are;
    /// use [`DecisionTree::save`] to reject labels the dump cannot hold.
    pub fn to_lines(&self) -> Vec<String> {
        let mut lines = Vec::new();
        if let Some(ref root) = self.root {
            root.push_lines(&mut lines);
        }
        lines
    }

    /// Writes the dump of this tree to `writer`.
    ///
    /// Fails with [`Error::InvalidInput`] before writing anything
    /// if a leaf label contains a line break or starts with `Feature: `,
    /// since such a dump would not read back as the same tree.
    pub fn save<W: Write>(&self, mut writer: W) -> Result<()> {
        if let Some(ref root) = self.root {
            root.check_labels()?;
        }
        for line in self.to_lines() {
            writeln!(writer, "{line}")?;
        }
        writer.flush()?;
        Ok(())
    }

    /// Reads a tree from its dump.
    /// The leaves of the returned tree carry no training documents.
    pub fn load<R: BufRead>(reader: R) -> Result<Self> {
        let tree = TreeReader::new(reader.lines()).read_tree()?;
        info!("loaded a tree with {} leaves", tree.leaves());
        Ok(tree)
    }

    /// Reads a tree from an in-memory dump.
    pub fn from_lines<I, S>(lines: I) -> Result<Self>
        where I: IntoIterator<Item = S>,
              S: AsRef<str>,
    {
        let lines = lines.into_iter()
            .map(|line| Ok(line.as_ref().to_string()));
        TreeReader::new(lines).read_tree()
    }
}

impl Node {
    fn push_lines(&self, lines: &mut Vec<String>) {
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            match node {
                Self::Branch { splitter, left, right } => {
                    lines.push(format!("{FEATURE_PREFIX}{}", splitter.feature));
                    lines.push(format!("{THRESHOLD_PREFIX}{}", splitter.threshold));
                    stack.push(right.as_ref());
                    stack.push(left.as_ref());
                },
                Self::Leaf { label, .. } => {
                    lines.push(label.clone());
                },
            }
        }
    }

    fn check_labels(&self) -> Result<()> {
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            match node {
                Self::Branch { left, right, .. } => {
                    stack.push(right.as_ref());
                    stack.push(left.as_ref());
                },
                Self::Leaf { label, .. } => {
                    if label.contains(['\n', '\r']) {
                        return Err(Error::invalid_input(format!(
                            "label {label:?} contains a line break"
                        )));
                    }
                    if label.starts_with(FEATURE_PREFIX) {
                        return Err(Error::invalid_input(format!(
                            "label {label:?} would be read as a feature line"
                        )));
                    }
                },
            }
        }
        Ok(())
    }
}

/// A half-read branch: its rule and, once complete, its left subtree.
struct Pending {
    splitter: Splitter,
    left: Option<Node>,
}

/// Reads a dump line by line, keeping unfinished branches on a stack.
struct TreeReader<I> {
    lines: I,
    line_no: usize,
}

impl<I> TreeReader<I>
    where I: Iterator<Item = io::Result<String>>
{
    fn new(lines: I) -> Self {
        Self { lines, line_no: 0 }
    }

    fn next_line(&mut self) -> Result<Option<String>> {
        match self.lines.next() {
            Some(line) => {
                self.line_no += 1;
                Ok(Some(line?))
            },
            None => Ok(None),
        }
    }

    fn read_tree(mut self) -> Result<DecisionTree> {
        let root = match self.next_line()? {
            Some(line) => self.read_root(line)?,
            None => return Ok(DecisionTree::new()),
        };

        // Blank lines after the root subtree are tolerated.
        while let Some(line) = self.next_line()? {
            if !line.trim().is_empty() {
                return Err(Error::malformed(
                    self.line_no,
                    format!("unexpected line `{line}` after the end of the tree"),
                ));
            }
        }

        Ok(DecisionTree::from(root))
    }

    /// Reads the subtree that starts with `line`.
    fn read_root(&mut self, mut line: String) -> Result<Node> {
        let mut pending: Vec<Pending> = Vec::new();
        loop {
            if let Some(feature) = line.strip_prefix(FEATURE_PREFIX) {
                let threshold = self.read_threshold()?;
                let splitter = Splitter::new(feature, threshold);
                pending.push(Pending { splitter, left: None });
            } else {
                // A leaf completes every branch waiting for its right child.
                let mut node = Node::leaf(line);
                loop {
                    let Some(mut top) = pending.pop() else {
                        return Ok(node);
                    };
                    match top.left.take() {
                        None => {
                            top.left = Some(node);
                            pending.push(top);
                            break;
                        },
                        Some(left) => {
                            node = Node::branch(
                                top.splitter, Box::new(left), Box::new(node),
                            );
                        },
                    }
                }
            }

            line = self.next_line()?
                .ok_or_else(|| Error::malformed(
                    self.line_no + 1,
                    "input ended before both children of a branch were read",
                ))?;
        }
    }

    fn read_threshold(&mut self) -> Result<f64> {
        let line = self.next_line()?
            .ok_or_else(|| Error::malformed(
                self.line_no + 1,
                "missing threshold line after a feature line",
            ))?;

        let value = line.strip_prefix(THRESHOLD_PREFIX)
            .ok_or_else(|| Error::malformed(
                self.line_no,
                format!("expected `{THRESHOLD_PREFIX}<number>`, got `{line}`"),
            ))?;

        value.trim()
            .parse::<f64>()
            .map_err(|e| Error::malformed(
                self.line_no,
                format!("threshold `{value}` is not a number ({e})"),
            ))
    }
}
