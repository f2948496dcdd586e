//! Content classification: decide whether a byte buffer is text.
//!
//! Sniffing follows the common MIME-sniffing heuristic used by web servers:
//! only the first [`SNIFF_LEN`] bytes are inspected, known signatures (byte order
//! marks, markup, image/audio/video/archive/font/executable magic numbers) are
//! tried in order, and anything left over is text unless it contains a byte that
//! never appears in text (NUL and most C0 control characters).
//!
//! A buffer is textual when its detected content type starts with `text/`.

/// Number of leading bytes inspected.
pub const SNIFF_LEN: usize = 512;

/// Content type reported for text without a more specific signature.
pub const TEXT_PLAIN: &str = "text/plain; charset=utf-8";

/// Content type reported when nothing more specific matched and the data is binary.
pub const OCTET_STREAM: &str = "application/octet-stream";

enum Signature {
    /// Literal prefix, optionally after leading whitespace.
    Prefix {
        pattern: &'static [u8],
        skip_ws: bool,
        content_type: &'static str,
    },
    /// Prefix compared under a mask (`0x00` mask bytes are wildcards).
    Masked {
        mask: &'static [u8],
        pattern: &'static [u8],
        content_type: &'static str,
    },
    /// Case-insensitive HTML tag followed by a space or `>`.
    Html(&'static [u8]),
    /// ISO base media file with an `mp4` brand.
    Mp4,
}

const HTML: &str = "text/html; charset=utf-8";

static SIGNATURES: &[Signature] = &[
    Signature::Html(b"<!DOCTYPE HTML"),
    Signature::Html(b"<HTML"),
    Signature::Html(b"<HEAD"),
    Signature::Html(b"<SCRIPT"),
    Signature::Html(b"<IFRAME"),
    Signature::Html(b"<H1"),
    Signature::Html(b"<DIV"),
    Signature::Html(b"<FONT"),
    Signature::Html(b"<TABLE"),
    Signature::Html(b"<A"),
    Signature::Html(b"<STYLE"),
    Signature::Html(b"<TITLE"),
    Signature::Html(b"<B"),
    Signature::Html(b"<BODY"),
    Signature::Html(b"<BR"),
    Signature::Html(b"<P"),
    Signature::Html(b"<!--"),
    Signature::Prefix {
        pattern: b"<?xml",
        skip_ws: true,
        content_type: "text/xml; charset=utf-8",
    },
    prefix(b"%PDF-", "application/pdf"),
    prefix(b"%!PS-Adobe-", "application/postscript"),
    // Byte order marks
    prefix(b"\xFE\xFF", "text/plain; charset=utf-16be"),
    prefix(b"\xFF\xFE", "text/plain; charset=utf-16le"),
    prefix(b"\xEF\xBB\xBF", TEXT_PLAIN),
    // Images
    prefix(b"\x00\x00\x01\x00", "image/x-icon"),
    prefix(b"\x00\x00\x02\x00", "image/x-icon"),
    prefix(b"BM", "image/bmp"),
    prefix(b"GIF87a", "image/gif"),
    prefix(b"GIF89a", "image/gif"),
    Signature::Masked {
        mask: b"\xFF\xFF\xFF\xFF\x00\x00\x00\x00\xFF\xFF\xFF\xFF\xFF\xFF",
        pattern: b"RIFF\x00\x00\x00\x00WEBPVP",
        content_type: "image/webp",
    },
    prefix(b"\x89PNG\x0D\x0A\x1A\x0A", "image/png"),
    prefix(b"\xFF\xD8\xFF", "image/jpeg"),
    // Audio and video
    Signature::Masked {
        mask: b"\xFF\xFF\xFF\xFF\x00\x00\x00\x00\xFF\xFF\xFF\xFF",
        pattern: b"FORM\x00\x00\x00\x00AIFF",
        content_type: "audio/aiff",
    },
    prefix(b"ID3", "audio/mpeg"),
    prefix(b"OggS\x00", "application/ogg"),
    prefix(b"MThd\x00\x00\x00\x06", "audio/midi"),
    Signature::Masked {
        mask: b"\xFF\xFF\xFF\xFF\x00\x00\x00\x00\xFF\xFF\xFF\xFF",
        pattern: b"RIFF\x00\x00\x00\x00AVI ",
        content_type: "video/avi",
    },
    Signature::Masked {
        mask: b"\xFF\xFF\xFF\xFF\x00\x00\x00\x00\xFF\xFF\xFF\xFF",
        pattern: b"RIFF\x00\x00\x00\x00WAVE",
        content_type: "audio/wave",
    },
    Signature::Mp4,
    prefix(b"\x1A\x45\xDF\xA3", "video/webm"),
    // Fonts
    prefix(b"\x00\x01\x00\x00", "font/ttf"),
    prefix(b"OTTO", "font/otf"),
    prefix(b"ttcf", "font/collection"),
    prefix(b"wOFF", "font/woff"),
    prefix(b"wOF2", "font/woff2"),
    // Archives
    prefix(b"\x1F\x8B\x08", "application/x-gzip"),
    prefix(b"PK\x03\x04", "application/zip"),
    prefix(b"Rar!\x1A\x07\x00", "application/x-rar-compressed"),
    prefix(b"Rar!\x1A\x07\x01\x00", "application/x-rar-compressed"),
    prefix(b"\x00\x61\x73\x6D", "application/wasm"),
    // Executables
    prefix(b"\x7FELF", "application/x-elf"),
    prefix(b"\xFE\xED\xFA\xCE", "application/x-mach-binary"),
    prefix(b"\xCE\xFA\xED\xFE", "application/x-mach-binary"),
    prefix(b"\xFE\xED\xFA\xCF", "application/x-mach-binary"),
    prefix(b"\xCF\xFA\xED\xFE", "application/x-mach-binary"),
    prefix(b"\xCA\xFE\xBA\xBE", "application/x-mach-binary"),
];

const fn prefix(pattern: &'static [u8], content_type: &'static str) -> Signature {
    Signature::Prefix {
        pattern,
        skip_ws: false,
        content_type,
    }
}

impl Signature {
    fn matches(&self, data: &[u8]) -> Option<&'static str> {
        match self {
            Signature::Prefix {
                pattern,
                skip_ws,
                content_type,
            } => {
                let data = if *skip_ws { skip_whitespace(data) } else { data };
                data.starts_with(pattern).then_some(*content_type)
            }
            Signature::Masked {
                mask,
                pattern,
                content_type,
            } => {
                if data.len() < pattern.len() {
                    return None;
                }
                let hit = data
                    .iter()
                    .zip(mask.iter())
                    .zip(pattern.iter())
                    .all(|((&b, &m), &p)| b & m == p);
                hit.then_some(*content_type)
            }
            Signature::Html(tag) => {
                let data = skip_whitespace(data);
                if data.len() < tag.len() + 1 {
                    return None;
                }
                for (&b, &t) in data.iter().zip(tag.iter()) {
                    let b = if t.is_ascii_uppercase() { b & 0xDF } else { b };
                    if b != t {
                        return None;
                    }
                }
                matches!(data[tag.len()], b' ' | b'>').then_some(HTML)
            }
            Signature::Mp4 => is_mp4(data).then_some("video/mp4"),
        }
    }
}

fn skip_whitespace(data: &[u8]) -> &[u8] {
    let start = data
        .iter()
        .position(|b| !matches!(b, b'\t' | b'\n' | b'\x0C' | b'\r' | b' '))
        .unwrap_or(data.len());
    &data[start..]
}

fn is_mp4(data: &[u8]) -> bool {
    if data.len() < 12 {
        return false;
    }
    let box_size = u32::from_be_bytes([data[0], data[1], data[2], data[3]]) as usize;
    if data.len() < box_size || box_size % 4 != 0 || &data[4..8] != b"ftyp" {
        return false;
    }
    // Major brand at 8..12, compatible brands from 16 up to the end of the box.
    (8..box_size)
        .step_by(4)
        .filter(|&st| st != 12)
        .any(|st| data.get(st..st + 3) == Some(b"mp4".as_slice()))
}

/// Bytes that never appear in text: NUL, most C0 controls, but not TAB, LF, FF, CR or ESC.
fn is_binary_byte(b: u8) -> bool {
    b <= 0x08 || b == 0x0B || (0x0E..=0x1A).contains(&b) || (0x1C..=0x1F).contains(&b)
}

/// Detect the content type of `data` from its first [`SNIFF_LEN`] bytes.
///
/// Always returns a valid MIME type; falls back to [`OCTET_STREAM`].
pub fn detect_content_type(data: &[u8]) -> &'static str {
    let sample = &data[..data.len().min(SNIFF_LEN)];

    if let Some(content_type) = SIGNATURES.iter().find_map(|sig| sig.matches(sample)) {
        return content_type;
    }

    if sample.iter().any(|&b| is_binary_byte(b)) {
        OCTET_STREAM
    } else {
        TEXT_PLAIN
    }
}

/// Check if data is text rather than binary.
///
/// An empty buffer is text.
pub fn is_textual(data: &[u8]) -> bool {
    is_textual_type(detect_content_type(data))
}

/// Whether a detected content type counts as text.
pub fn is_textual_type(content_type: &str) -> bool {
    content_type.starts_with("text/")
}
