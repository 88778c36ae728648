//! Method signature tokenizer.
//!
//! Splits `name(t1,t2,...)ret` around its outermost argument-list
//! parentheses. Nested parentheses inside tuple argument types are skipped
//! by tracking unmatched `(` on a stack and stopping at the first group that
//! closes back to depth zero.

use crate::errors::{Arc4Error, Result};

/// The three tokens of a method signature
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SignatureTokens<'a> {
    /// Text before the opening parenthesis
    pub name: &'a str,
    /// Comma-joined argument types between the outer parentheses
    pub args: &'a str,
    /// Text after the closing parenthesis (`"void"` or a type)
    pub returns: &'a str,
}

/// Tokenize a method signature.
///
/// `"add(uint32,uint32)uint64"` yields name `"add"`, args `"uint32,uint32"`
/// and returns `"uint64"`.
///
/// # Errors
///
/// `MalformedSignature` if no balanced outer parenthesis pair is found, or a
/// `)` appears before any `(`.
pub fn tokenize(s: &str) -> Result<SignatureTokens<'_>> {
    let mut stack: Vec<usize> = Vec::new();
    for (i, c) in s.char_indices() {
        match c {
            '(' => stack.push(i),
            ')' => {
                let Some(left) = stack.pop() else {
                    break;
                };
                if stack.is_empty() {
                    return Ok(SignatureTokens {
                        name: &s[..left],
                        args: &s[left + 1..i],
                        returns: &s[i + 1..],
                    });
                }
            }
            _ => {}
        }
    }

    Err(Arc4Error::MalformedSignature {
        signature: s.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_simple() {
        let t = tokenize("add(uint32,uint32)uint64").unwrap();
        assert_eq!(t.name, "add");
        assert_eq!(t.args, "uint32,uint32");
        assert_eq!(t.returns, "uint64");
    }

    #[test]
    fn test_tokenize_no_args() {
        let t = tokenize("noop()void").unwrap();
        assert_eq!(t.name, "noop");
        assert_eq!(t.args, "");
        assert_eq!(t.returns, "void");
    }

    #[test]
    fn test_tokenize_nested_tuples() {
        let t = tokenize("f((uint64,(bool,byte)),string)(uint8,uint8)").unwrap();
        assert_eq!(t.name, "f");
        assert_eq!(t.args, "(uint64,(bool,byte)),string");
        assert_eq!(t.returns, "(uint8,uint8)");
    }

    #[test]
    fn test_tokenize_malformed() {
        for bad in ["f", "f(uint64", "f)uint64(", "f((uint64)void", ""] {
            assert!(
                matches!(tokenize(bad), Err(Arc4Error::MalformedSignature { .. })),
                "{} should be malformed",
                bad
            );
        }
    }
}
