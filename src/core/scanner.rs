//! Single-pass brace-depth scanner that partitions a terraform file's
//! lines into top-level blocks.
//!
//! The scanner is deliberately naive about the language: it counts every
//! `{` and `}` on every line, so a brace inside a quoted string or a
//! comment corrupts the depth tracking. That is accepted behavior for
//! the input corpus this tool targets, not something to paper over here.

/// A contiguous, brace-balanced run of input lines.
///
/// A block starts on the first line containing an opening brace found
/// while outside any block, and ends on the line where the running brace
/// depth returns to zero. Both line indices are 0-based and inclusive,
/// and `lines` carries the full inclusive range, opening and closing
/// line included.
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    /// The leading keyword of the opening line (e.g. `resource`).
    pub block_type: String,
    /// The remaining opening-line tokens joined with `.`, double quotes
    /// stripped (e.g. `aws_vpc.this`). Empty when the opening line has a
    /// single token.
    pub block_name: String,
    /// 0-based index of the opening line in the input sequence.
    pub start_line: usize,
    /// 0-based index of the closing line, inclusive.
    pub end_line: usize,
    /// The block's lines, inclusive of the opening and closing line.
    pub lines: Vec<String>,
}

/// Scans an ordered line sequence and returns every top-level
/// brace-delimited block, in input order.
///
/// Lines outside any block that contain no opening brace are dropped
/// silently; that covers blank lines, comments and stray text between
/// blocks. A trailing block whose braces never re-balance is dropped the
/// same way, so the scanner is total: it never fails, it only omits.
///
/// The scan is one forward pass. Emitted block ranges never overlap and
/// line indices are strictly increasing from one block to the next.
///
/// # Arguments
/// * `lines`: The input lines, one entry per line, terminators stripped.
///
/// # Returns
/// A `Vec<Block>` covering every balanced top-level block in the input.
pub fn scan_blocks(lines: &[String]) -> Vec<Block> {
    let mut blocks = Vec::new();

    let mut inside_block = false;
    let mut block_type = String::new();
    let mut block_name = String::new();
    let mut start_line = 0;

    // Each '{' adds 1, each '}' removes 1; depth 0 after a full line
    // marks the end of the current block.
    let mut depth: i32 = 0;

    for (index, line) in lines.iter().enumerate() {
        if !inside_block {
            if !line.contains('{') {
                continue;
            }
            // This line opens a block: remember where it starts and
            // classify it before the depth walk below.
            start_line = index;
            inside_block = true;
            (block_type, block_name) = classify_opening_line(line);
        }

        // Depth-walk every character of the current line, including the
        // line that just opened the block.
        for byte in line.bytes() {
            match byte {
                b'{' => depth += 1,
                b'}' => depth -= 1,
                _ => {}
            }
        }

        if depth == 0 {
            blocks.push(Block {
                block_type: std::mem::take(&mut block_type),
                block_name: std::mem::take(&mut block_name),
                start_line,
                end_line: index,
                lines: lines[start_line..=index].to_vec(),
            });
            inside_block = false;
        }
    }

    blocks
}

/// Derives the `(block_type, block_name)` pair from a block's opening
/// line.
///
/// The header is everything strictly before the rightmost opening brace,
/// minus one more trailing byte (the character immediately preceding the
/// brace, normally the separating space). The header splits on single
/// spaces: the first token is the type; any further tokens, stripped of
/// double quotes and joined with `.`, form the name.
///
/// A brace in the very first column leaves no room for a header; the
/// pair is then defined as two empty strings rather than a fault. The
/// trim is byte-oriented, so a multi-byte character right before the
/// brace is truncated lossily instead of panicking.
///
/// # Arguments
/// * `line`: The opening line of a block (must contain `{` to yield a
///   non-empty header).
///
/// # Returns
/// The `(block_type, block_name)` pair, either of which may be empty.
pub fn classify_opening_line(line: &str) -> (String, String) {
    let bytes = line.as_bytes();
    let mut header = String::new();

    for index in (0..bytes.len()).rev() {
        if bytes[index] == b'{' {
            if index > 0 {
                header = String::from_utf8_lossy(&bytes[..index - 1]).into_owned();
            }
            break;
        }
    }

    let mut tokens = header.split(' ');
    let block_type = tokens.next().unwrap_or_default().to_string();
    let rest: Vec<&str> = tokens.collect();
    let block_name = if rest.is_empty() {
        String::new()
    } else {
        rest.join(".").replace('"', "")
    };

    (block_type, block_name)
}
