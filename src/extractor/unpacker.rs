//! Decoder for scripts packed with Dean Edwards' `p,a,c,k,e,d` packer

use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::parser::regex;

const MARKER: &str = "eval(function(p,a,c,k,e,d)";
const ALPHABET: &str = "0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

static ARGS: LazyLock<Regex> = LazyLock::new(|| {
    regex(r"(?s)\}\s*\(\s*'(.*)'\s*,\s*(\d+)\s*,\s*(\d+)\s*,\s*'(.*?)'\.split\('\|'\)")
});

static WORD: LazyLock<Regex> = LazyLock::new(|| regex(r"\b\w+\b"));

/// First packed script in an html page, up to its closing tag
pub fn find_packed(html: &str) -> Option<&str> {
    let start = html.find(MARKER)?;
    let script = &html[start..];
    let end = script.find("</script>").unwrap_or(script.len());

    Some(&script[..end])
}

/// Unpacks the first packed script in `html`, if any
pub fn unpack_html(html: &str) -> Option<String> {
    find_packed(html).and_then(unpack)
}

pub fn unpack(script: &str) -> Option<String> {
    let caps = ARGS.captures(script)?;

    let payload = caps[1].replace("\\'", "'").replace("\\\\", "\\");
    let radix = caps[2].parse::<usize>().ok()?;
    let count = caps[3].parse::<usize>().ok()?;
    let words: Vec<_> = caps[4].split('|').collect();

    if !(2..=ALPHABET.len()).contains(&radix) || words.len() < count {
        return None;
    }

    let res = WORD.replace_all(&payload, |c: &Captures| {
        let token = &c[0];

        match decode(token, radix).and_then(|i| words.get(i)) {
            Some(word) if !word.is_empty() => word.to_string(),
            _ => token.to_string(),
        }
    });

    Some(res.into_owned())
}

fn decode(token: &str, radix: usize) -> Option<usize> {
    token.chars().try_fold(0usize, |acc, c| {
        let digit = ALPHABET.find(c).filter(|d| *d < radix)?;
        acc.checked_mul(radix)?.checked_add(digit)
    })
}
