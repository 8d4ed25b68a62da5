use crate::{YamlError, YamlResult};

/// Character encodings of YAML byte streams.
///
/// The parser sniffs the encoding of its input from a byte order mark (or the
/// null byte pattern of the first characters). The emitter uses the encoding
/// of its output to decide which characters must be escaped.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default, Hash)]
pub enum Encoding {
    #[default]
    Utf8,
    Utf16Le,
    Utf16Be,
    Utf32Le,
    Utf32Be,
    Latin1,
    Ascii,
}

impl Encoding {
    /// Returns the sniffed encoding and the length of its byte order mark.
    #[must_use]
    pub fn detect(bytes: &[u8]) -> (Encoding, usize) {
        match bytes {
            [0xEF, 0xBB, 0xBF, ..] => (Encoding::Utf8, 3),
            [0x00, 0x00, 0xFE, 0xFF, ..] => (Encoding::Utf32Be, 4),
            [0xFF, 0xFE, 0x00, 0x00, ..] => (Encoding::Utf32Le, 4),
            [0xFE, 0xFF, ..] => (Encoding::Utf16Be, 2),
            [0xFF, 0xFE, ..] => (Encoding::Utf16Le, 2),
            [0x00, 0x00, 0x00, x, ..] if *x != 0 => (Encoding::Utf32Be, 0),
            [x, 0x00, 0x00, 0x00, ..] if *x != 0 => (Encoding::Utf32Le, 0),
            [0x00, x, ..] if *x != 0 => (Encoding::Utf16Be, 0),
            [x, 0x00, ..] if *x != 0 => (Encoding::Utf16Le, 0),
            _ => (Encoding::Utf8, 0),
        }
    }

    /// Sniffs the encoding of `bytes` and decodes them, dropping the byte order mark.
    ///
    /// # Errors
    /// Returns [`YamlError::NonDecodable`] when the bytes are not valid in the detected encoding.
    pub fn decode(bytes: &[u8]) -> YamlResult<String> {
        let (encoding, bom_len) = Encoding::detect(bytes);
        encoding.decode_without_bom(&bytes[bom_len..])
    }

    /// Decodes `bytes` in this encoding. A byte order mark is not expected.
    ///
    /// # Errors
    /// Returns [`YamlError::NonDecodable`] on invalid input.
    pub fn decode_without_bom(self, bytes: &[u8]) -> YamlResult<String> {
        match self {
            Encoding::Utf8 => std::str::from_utf8(bytes)
                .map(str::to_string)
                .map_err(|e| non_decodable(&format!("invalid UTF-8: {e}"))),
            Encoding::Utf16Le | Encoding::Utf16Be => {
                if bytes.len() % 2 != 0 {
                    return Err(non_decodable("incomplete UTF-16 character"));
                }
                let units = bytes.chunks_exact(2).map(|pair| {
                    let pair = [pair[0], pair[1]];
                    if self == Encoding::Utf16Le {
                        u16::from_le_bytes(pair)
                    } else {
                        u16::from_be_bytes(pair)
                    }
                });
                char::decode_utf16(units)
                    .collect::<Result<String, _>>()
                    .map_err(|e| non_decodable(&format!("invalid UTF-16: {e}")))
            }
            Encoding::Utf32Le | Encoding::Utf32Be => {
                if bytes.len() % 4 != 0 {
                    return Err(non_decodable("incomplete UTF-32 character"));
                }
                bytes
                    .chunks_exact(4)
                    .map(|quad| {
                        let quad = [quad[0], quad[1], quad[2], quad[3]];
                        let code = if self == Encoding::Utf32Le {
                            u32::from_le_bytes(quad)
                        } else {
                            u32::from_be_bytes(quad)
                        };
                        char::from_u32(code).ok_or_else(|| {
                            non_decodable(&format!("invalid UTF-32 code point {code:#X}"))
                        })
                    })
                    .collect()
            }
            Encoding::Latin1 => Ok(bytes.iter().map(|&b| char::from(b)).collect()),
            Encoding::Ascii => bytes
                .iter()
                .map(|&b| {
                    if b.is_ascii() {
                        Ok(char::from(b))
                    } else {
                        Err(non_decodable(&format!("invalid ASCII byte {b:#X}")))
                    }
                })
                .collect(),
        }
    }

    /// Whether every Unicode scalar value can be written in this encoding.
    #[must_use]
    pub fn is_unicode(self) -> bool {
        !matches!(self, Encoding::Latin1 | Encoding::Ascii)
    }

    #[must_use]
    pub fn can_encode(self, ch: char) -> bool {
        match self {
            Encoding::Latin1 => u32::from(ch) <= 0xFF,
            Encoding::Ascii => ch.is_ascii(),
            _ => true,
        }
    }

    /// Encodes `text` without a byte order mark. Characters outside the
    /// encoding are replaced by `?`.
    #[must_use]
    pub fn encode(self, text: &str) -> Vec<u8> {
        match self {
            Encoding::Utf8 => text.as_bytes().to_vec(),
            Encoding::Utf16Le => text.encode_utf16().flat_map(u16::to_le_bytes).collect(),
            Encoding::Utf16Be => text.encode_utf16().flat_map(u16::to_be_bytes).collect(),
            Encoding::Utf32Le => text.chars().flat_map(|c| u32::from(c).to_le_bytes()).collect(),
            Encoding::Utf32Be => text.chars().flat_map(|c| u32::from(c).to_be_bytes()).collect(),
            Encoding::Latin1 | Encoding::Ascii => text
                .chars()
                .map(|c| {
                    if self.can_encode(c) {
                        u32::from(c) as u8
                    } else {
                        b'?'
                    }
                })
                .collect(),
        }
    }
}

fn non_decodable(info: &str) -> YamlError {
    YamlError::NonDecodable {
        info: info.to_string(),
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn sniff_bom() {
        assert_eq!(Encoding::detect(b"\xEF\xBB\xBFa"), (Encoding::Utf8, 3));
        assert_eq!(Encoding::detect(b"\xFF\xFEa\x00"), (Encoding::Utf16Le, 2));
        assert_eq!(Encoding::detect(b"\xFE\xFF\x00a"), (Encoding::Utf16Be, 2));
        assert_eq!(
            Encoding::detect(b"\xFF\xFE\x00\x00a\x00\x00\x00"),
            (Encoding::Utf32Le, 4)
        );
        assert_eq!(Encoding::detect(b"\x00\x00\x00a"), (Encoding::Utf32Be, 0));
        assert_eq!(Encoding::detect(b"a\x00b\x00"), (Encoding::Utf16Le, 0));
        assert_eq!(Encoding::detect(b"ab"), (Encoding::Utf8, 0));
        assert_eq!(Encoding::detect(b""), (Encoding::Utf8, 0));
    }

    #[test]
    fn decode_utf16() {
        let bytes = Encoding::Utf16Be.encode("- ключ: 😀\n");
        let mut input = vec![0xFE, 0xFF];
        input.extend(bytes);
        assert_eq!(Encoding::decode(&input).unwrap(), "- ключ: 😀\n");
    }

    #[test]
    fn decode_errors() {
        assert!(matches!(
            Encoding::decode(b"a: \xFF\xFF\xFF"),
            Err(YamlError::NonDecodable { .. })
        ));
        assert!(Encoding::Utf16Le.decode_without_bom(b"a").is_err());
        assert!(Encoding::Ascii.decode_without_bom(b"\xE9").is_err());
        assert_eq!(Encoding::Latin1.decode_without_bom(b"\xE9").unwrap(), "é");
    }

    #[test]
    fn encodable() {
        assert!(Encoding::Latin1.can_encode('é'));
        assert!(!Encoding::Latin1.can_encode('ж'));
        assert!(!Encoding::Ascii.can_encode('é'));
        assert!(Encoding::Utf16Le.can_encode('😀'));
        assert_eq!(Encoding::Ascii.encode("aé"), b"a?");
    }
}
