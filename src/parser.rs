//! `nom`-based parser. Lowers source text directly into `V` trees — this
//! crate has no separate generic parse-tree stage.

use nom::{
    branch::alt,
    bytes::complete::tag,
    character::complete::{char, digit1, multispace0, multispace1, none_of, one_of},
    combinator::{map, opt, recognize, value},
    multi::{many0, many1},
    sequence::{delimited, pair, preceded},
    IResult, Parser,
};

use crate::value::V;

const SYMBOL_CHARS: &str = "+-*/\\=<>!&_";

fn is_symbol_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || SYMBOL_CHARS.contains(c)
}

fn line_comment(input: &str) -> IResult<&str, ()> {
    value((), pair(char(';'), nom::bytes::complete::is_not("\r\n"))).parse(input)
}

/// Whitespace and comments between tokens.
fn ws(input: &str) -> IResult<&str, ()> {
    value(
        (),
        many0(alt((value((), multispace1), line_comment))),
    )
    .parse(input)
}

/// On `i64` range failure this yields `V::Err("invalid number")` rather than
/// silently truncating or defaulting — the token parsed, the value didn't.
fn parse_integer(input: &str) -> IResult<&str, V> {
    map(recognize(pair(opt(char('-')), digit1)), |s: &str| {
        match s.parse::<i64>() {
            Ok(n) => V::Int(n),
            Err(_) => V::err("invalid number"),
        }
    })
    .parse(input)
}

/// On `f64` range failure this yields `V::Err("invalid number")`, matching
/// `parse_integer`'s handling of its own range failure.
fn parse_double(input: &str) -> IResult<&str, V> {
    let leading_digits = recognize((digit1, char('.'), opt(digit1)));
    let leading_dot = recognize((char('.'), digit1));
    map(
        recognize(pair(opt(char('-')), alt((leading_digits, leading_dot)))),
        |s: &str| match s.parse::<f64>() {
            Ok(n) => V::Float(n),
            Err(_) => V::err("invalid number"),
        },
    )
    .parse(input)
}

/// A number token is a double if it contains a `.`, else an integer —
/// doubles must be tried first since `42` is a valid prefix of `42.5`.
fn parse_number(input: &str) -> IResult<&str, V> {
    alt((parse_double, parse_integer)).parse(input)
}

fn parse_symbol(input: &str) -> IResult<&str, V> {
    map(
        nom::bytes::complete::take_while1(is_symbol_char),
        |s: &str| V::Sym(s.to_string()),
    )
    .parse(input)
}

fn unescape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            match chars.next() {
                Some('n') => out.push('\n'),
                Some('t') => out.push('\t'),
                Some('r') => out.push('\r'),
                Some('"') => out.push('"'),
                Some('\\') => out.push('\\'),
                Some(other) => out.push(other),
                None => {}
            }
        } else {
            out.push(c);
        }
    }
    out
}

fn parse_string(input: &str) -> IResult<&str, V> {
    let (rest, raw) = delimited(
        char('"'),
        nom::bytes::complete::escaped(none_of("\"\\"), '\\', one_of("ntr\"\\")),
        char('"'),
    )
    .parse(input)?;
    Ok((rest, V::Str(unescape(raw))))
}

fn parse_sexpr(input: &str) -> IResult<&str, V> {
    map(
        delimited(
            pair(char('('), multispace0),
            many0(delimited(ws, parse_expr, ws)),
            char(')'),
        ),
        V::SExpr,
    )
    .parse(input)
}

fn parse_qexpr(input: &str) -> IResult<&str, V> {
    map(
        delimited(
            pair(char('{'), multispace0),
            many0(delimited(ws, parse_expr, ws)),
            char('}'),
        ),
        V::QExpr,
    )
    .parse(input)
}

/// A single expression: number, string, symbol, S-expression, or Q-expression.
pub fn parse_expr(input: &str) -> IResult<&str, V> {
    alt((parse_number, parse_string, parse_sexpr, parse_qexpr, parse_symbol)).parse(input)
}

/// Parses exactly one top-level expression, surrounded by optional
/// whitespace/comments. Used by the REPL, which reads one expression per line.
pub fn parse_one(input: &str) -> Result<V, String> {
    let (rest, v) = delimited(ws, parse_expr, ws)
        .parse(input)
        .map_err(|e| e.to_string())?;
    if !rest.is_empty() {
        return Err(format!("unexpected trailing input: {:?}", rest));
    }
    Ok(v)
}

/// Parses every top-level expression in `input`, in order. Used by `load` and
/// by file-mode script execution.
pub fn parse_program(input: &str) -> Result<Vec<V>, String> {
    let (rest, exprs) = many1(delimited(ws, parse_expr, ws))
        .parse(input)
        .map_err(|e| e.to_string())?;
    if !rest.trim().is_empty() {
        return Err(format!("unexpected trailing input: {:?}", rest));
    }
    Ok(exprs)
}
