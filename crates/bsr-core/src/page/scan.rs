//! Tag scanner: finds start and end tags and where they begin.
//!
//! This is not a full HTML tokenizer. It knows enough to skip comments, doctype
//! and processing instructions, to step over quoted attribute values, and to treat
//! the bodies of raw-text elements as opaque.

/// Elements whose content is not markup (scripting enabled, so `noscript` too).
const RAW_TEXT: &[&str] = &[
    "iframe", "noembed", "noframes", "noscript", "script", "style", "textarea", "title",
    "xmp",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TagKind {
    Start,
    End,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Tag {
    /// ASCII-lowercased element name.
    pub name: String,
    pub kind: TagKind,
    /// Byte offset of the opening `<`.
    pub start: usize,
}

impl Tag {
    pub fn is_start(&self, name: &str) -> bool {
        self.kind == TagKind::Start && self.name == name
    }
}

/// Scan `src` and return every tag in document order.
pub(crate) fn scan_tags(src: &str) -> Vec<Tag> {
    let bytes = src.as_bytes();
    let mut tags = Vec::new();
    let mut pos = 0;

    while let Some(rel) = src[pos..].find('<') {
        let start = pos + rel;
        let rest = &src[start..];

        if let Some(comment) = rest.strip_prefix("<!--") {
            pos = comment_end(comment).map_or(src.len(), |i| start + 4 + i);
            continue;
        }
        if rest.starts_with("<!") || rest.starts_with("<?") {
            pos = match rest.find('>') {
                Some(i) => start + i + 1,
                None => src.len(),
            };
            continue;
        }

        let (kind, name_start) = if rest.starts_with("</") {
            (TagKind::End, start + 2)
        } else {
            (TagKind::Start, start + 1)
        };
        // A `<` not followed by a letter is text.
        if !bytes.get(name_start).is_some_and(u8::is_ascii_alphabetic) {
            pos = start + 1;
            continue;
        }
        let name_len = bytes[name_start..]
            .iter()
            .take_while(|b| b.is_ascii_alphanumeric() || **b == b'-')
            .count();
        let name = src[name_start..name_start + name_len].to_ascii_lowercase();

        let Some(end) = tag_end(bytes, name_start + name_len) else {
            break;
        };
        pos = end;
        if kind == TagKind::Start && name == "plaintext" {
            // Never closed: the rest of the input is text.
            pos = src.len();
        } else if kind == TagKind::Start && RAW_TEXT.contains(&name.as_str()) {
            pos = raw_text_end(src, end, &name);
        }
        tags.push(Tag { name, kind, start });
    }

    tags
}

/// Length of a comment body including its terminator, given the text after
/// `<!--`. `<!-->` and `<!--->` are complete empty comments.
fn comment_end(body: &str) -> Option<usize> {
    if body.starts_with('>') {
        return Some(1);
    }
    if body.starts_with("->") {
        return Some(2);
    }
    body.find("-->").map(|i| i + 3)
}

/// Offset just past the `>` closing a tag.
///
/// A quote opens a quoted value only as the first non-space character after `=`;
/// elsewhere it is part of a name or an unquoted value.
fn tag_end(bytes: &[u8], from: usize) -> Option<usize> {
    let mut quote: Option<u8> = None;
    let mut after_eq = false;
    for (i, &b) in bytes.iter().enumerate().skip(from) {
        if let Some(q) = quote {
            if b == q {
                quote = None;
            }
            continue;
        }
        match b {
            b'>' => return Some(i + 1),
            b'=' => after_eq = true,
            b'"' | b'\'' if after_eq => {
                quote = Some(b);
                after_eq = false;
            }
            b if b.is_ascii_whitespace() => {}
            _ => after_eq = false,
        }
    }
    None
}

/// Offset of the end tag closing a raw-text element (or end of input).
fn raw_text_end(src: &str, from: usize, name: &str) -> usize {
    let needle = format!("</{name}");
    src[from..]
        .to_ascii_lowercase()
        .find(&needle)
        .map(|i| from + i)
        .unwrap_or(src.len())
}
