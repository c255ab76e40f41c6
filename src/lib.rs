//! # Textcomb - Text Parser Combinator Library
//!
//! A parser combinator library for building recursive-descent text parsers
//! by composing small, reusable parsing functions instead of generating a
//! grammar. Textcomb provides composable, type-safe parsers that combine
//! into complex parsing logic from simple building blocks. The library
//! emphasizes:
//!
//! - **Zero panics on bad input**: all parsing errors are handled through
//!   `Result` types; panics are reserved for programmer errors
//! - **Precise diagnostics**: failures record the furthest position
//!   reached and render with line/column information
//! - **Composability**: small parsers combine into larger ones using
//!   combinators, step sequences and fixed-point recursion
//! - **Predictable backtracking**: ordered choice commits once a branch
//!   consumes input; backtracking is explicit and opt-in

pub mod and;
pub mod any_char;
pub mod apply;
pub mod attempt;
pub mod between;
pub mod bind;
pub mod concat;
pub mod cursor;
pub mod desc;
pub mod digit;
pub mod ends_with;
pub mod eof;
pub mod error;
pub mod excepts;
pub mod exclude;
pub mod fail;
pub mod filter;
pub mod fix;
pub mod lazy;
pub mod letter;
pub mod lexeme;
pub mod literal;
pub mod lookahead;
pub mod many;
pub mod map;
pub mod mark;
pub mod none_of;
pub mod one_of;
pub mod optional;
pub mod or;
pub mod or_backtrack;
pub mod parser;
pub mod pattern;
pub mod separated;
pub mod skip;
pub mod space;
pub mod steps;
pub mod then;
pub mod times;
pub mod value;

pub use and::{And, AndExt, and};
pub use any_char::{AnyChar, any_char};
pub use apply::{Apply, ApplyExt, apply};
pub use attempt::{Attempt, AttemptExt, attempt};
pub use between::{Between, between};
pub use bind::{Bind, BindExt, bind};
pub use concat::{Concat, ConcatExt, Concatenate, concat};
pub use cursor::TextCursor;
pub use desc::{Desc, DescExt, desc};
pub use digit::{Digit, digit};
pub use ends_with::{EndsWith, EndsWithExt, ends_with};
pub use eof::{Eof, eof};
pub use error::{Failure, ParseFailure, locate};
pub use excepts::{Excepts, ExceptsExt, excepts};
pub use exclude::{Exclude, exclude};
pub use fail::{Fail, fail};
pub use filter::{Filter, FilterExt, filter};
pub use fix::{FixRef, fix};
pub use lazy::{Lazy, lazy};
pub use letter::{Letter, letter};
pub use lexeme::{Lexeme, LexemeExt, lexeme};
pub use literal::{Literal, literal};
pub use lookahead::{Lookahead, lookahead};
pub use many::{many, many1};
pub use map::{Map, MapExt, map};
pub use mark::{Mark, MarkExt, mark};
pub use none_of::{NoneOf, none_of};
pub use one_of::{OneOf, one_of};
pub use optional::{Optional, OptionalExt, OptionalOr, optional, optional_or};
pub use or::{Or, OrExt, or};
pub use or_backtrack::{OrBacktrack, OrBacktrackExt, or_backtrack};
pub use parser::{Parsed, Parser};
pub use pattern::{Pattern, pattern};
pub use separated::{
    Separated, Trailing, end_by, end_by1, sep_by, sep_by1, sep_end_by, sep_end_by1, separated,
};
pub use skip::{Skip, SkipExt, skip};
pub use space::{Space, space, spaces};
pub use steps::{StepRunner, Steps, steps, steps_named};
pub use then::{Then, ThenExt, then};
pub use times::{Times, count, times};
pub use value::{WithValue, WithValueExt, with_value};
