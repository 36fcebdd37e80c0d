//! Depth-balanced opaque blocks.
//!
//! `{`, `[`, `(` and `<` raise the depth, their counterparts lower it. The
//! scan starts at depth 1 on the opening brace and stops once depth returns
//! to 0. Every character, quotes and delimiters included, is kept verbatim;
//! the structure inside is left to the parser's block policy.

use denv_ir::TokenKind;

use super::Scanner;
use crate::resolver::VariableResolver;

impl<R> Scanner<'_, R>
where
    R: VariableResolver + ?Sized,
{
    pub(super) fn block(&mut self) {
        let start = self.cursor.pos();
        let mut depth = 0usize;
        while let Some(c) = self.cursor.advance() {
            match c {
                '{' | '[' | '(' | '<' => depth += 1,
                '}' | ']' | ')' | '>' => depth = depth.saturating_sub(1),
                _ => {}
            }
            if depth == 0 {
                break;
            }
        }
        let text = self.cursor.slice_from(start);
        self.push(TokenKind::Opaque, text, start);
    }
}
