//! Recursive-descent WKT parser built on nom combinators

use crate::error::{Result, ShpError};
use crate::shapes::{GeometryCollection, MultiPolygon, PointShape, PolyLine, Polygon, Shape};
use crate::types::Point;
use nom::branch::alt;
use nom::bytes::complete::{tag, take_till1};
use nom::character::complete::{char, multispace0, multispace1};
use nom::combinator::{all_consuming, map};
use nom::error::{ErrorKind, FromExternalError, ParseError};
use nom::multi::separated_list1;
use nom::sequence::{delimited, preceded, separated_pair, terminated};
use nom::IResult;

/// Parser error: either a syntax mismatch or a typed conversion error
#[derive(Debug)]
enum WktParseError<'a> {
    Syntax { input: &'a str, kind: ErrorKind },
    TooDeep { input: &'a str },
    Shape(ShpError),
}

impl<'a> ParseError<&'a str> for WktParseError<'a> {
    fn from_error_kind(input: &'a str, kind: ErrorKind) -> Self {
        WktParseError::Syntax { input, kind }
    }

    fn append(_input: &'a str, _kind: ErrorKind, other: Self) -> Self {
        other
    }
}

impl<'a> FromExternalError<&'a str, ShpError> for WktParseError<'a> {
    fn from_external_error(_input: &'a str, _kind: ErrorKind, e: ShpError) -> Self {
        WktParseError::Shape(e)
    }
}

impl<'a> WktParseError<'a> {
    /// Convert into the public error type; `text` is the whole parsed input
    fn into_shp_error(self, text: &str) -> ShpError {
        match self {
            WktParseError::Shape(e) => e,
            WktParseError::TooDeep { input } => ShpError::MalformedWkt {
                offset: text.len() - input.len(),
                message: "geometry nesting too deep".to_string(),
            },
            WktParseError::Syntax { input, kind } => {
                let offset = text.len() - input.len();
                let message = if input.is_empty() {
                    "unexpected end of input".to_string()
                } else {
                    let snippet: String = input.chars().take(16).collect();
                    match kind {
                        ErrorKind::Eof => format!("unexpected trailing input '{}'", snippet),
                        _ => format!("unexpected '{}'", snippet),
                    }
                };
                ShpError::MalformedWkt { offset, message }
            }
        }
    }
}

type PResult<'a, T> = IResult<&'a str, T, WktParseError<'a>>;

/// Abort the whole parse with a typed error
fn fail<'a, T>(e: ShpError) -> PResult<'a, T> {
    Err(nom::Err::Failure(WktParseError::Shape(e)))
}

fn finish<T>(rest: &str, built: Result<T>) -> PResult<'_, T> {
    match built {
        Ok(value) => Ok((rest, value)),
        Err(e) => fail(e),
    }
}

fn is_token_end(c: char) -> bool {
    c.is_whitespace() || c == ',' || c == '(' || c == ')'
}

fn open_paren(input: &str) -> PResult<'_, char> {
    delimited(multispace0, char('('), multispace0)(input)
}

fn close_paren(input: &str) -> PResult<'_, char> {
    preceded(multispace0, char(')'))(input)
}

fn comma(input: &str) -> PResult<'_, char> {
    delimited(multispace0, char(','), multispace0)(input)
}

/// A finite floating-point token
fn number(input: &str) -> PResult<'_, f64> {
    let (rest, token) = take_till1::<_, _, WktParseError<'_>>(is_token_end)(input)?;
    match token.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok((rest, value)),
        _ => fail(ShpError::MalformedNumber(token.to_string())),
    }
}

/// `x y`, in WKT order (longitude then latitude)
fn coordinate(input: &str) -> PResult<'_, Point> {
    map(separated_pair(number, multispace1, number), |(x, y)| {
        Point::new(x, y)
    })(input)
}

/// `x y, x y, ...`
fn coordinate_list(input: &str) -> PResult<'_, Vec<Point>> {
    separated_list1(comma, coordinate)(input)
}

/// `(x y, x y, ...)`
fn ring(input: &str) -> PResult<'_, Vec<Point>> {
    delimited(open_paren, coordinate_list, close_paren)(input)
}

/// `(x y, ...), (x y, ...)`
fn ring_list(input: &str) -> PResult<'_, Vec<Vec<Point>>> {
    separated_list1(comma, ring)(input)
}

fn point_body(input: &str) -> PResult<'_, Point> {
    delimited(open_paren, coordinate, close_paren)(input)
}

/// Either parenthesized parts or a single bare coordinate list
fn linestring_body(input: &str) -> PResult<'_, Vec<Vec<Point>>> {
    delimited(
        open_paren,
        alt((ring_list, map(coordinate_list, |points| vec![points]))),
        close_paren,
    )(input)
}

fn polygon_body(input: &str) -> PResult<'_, Vec<Vec<Point>>> {
    delimited(open_paren, ring_list, close_paren)(input)
}

fn multipolygon_body(input: &str) -> PResult<'_, Vec<Vec<Vec<Point>>>> {
    delimited(open_paren, separated_list1(comma, polygon_body), close_paren)(input)
}

fn collection_body<'a>(input: &'a str, depth: usize) -> PResult<'a, Vec<Shape>> {
    delimited(
        open_paren,
        separated_list1(comma, |i: &'a str| geometry(i, depth + 1)),
        close_paren,
    )(input)
}

fn build_multipolygon(polygons: Vec<Vec<Vec<Point>>>) -> Result<Shape> {
    let polygons = polygons
        .into_iter()
        .map(Polygon::from_rings)
        .collect::<Result<Vec<_>>>()?;
    Ok(MultiPolygon::new(polygons)?.into())
}

const KEYWORDS: [&str; 6] = [
    "POINT",
    "LINESTRING",
    "MULTILINESTRING",
    "POLYGON",
    "MULTIPOLYGON",
    "GEOMETRYCOLLECTION",
];

/// Deepest `GEOMETRYCOLLECTION` nesting accepted
const MAX_NESTING_DEPTH: usize = 64;

/// Keyword dispatch; `depth` counts the enclosing collections
fn geometry(input: &str, depth: usize) -> PResult<'_, Shape> {
    if depth > MAX_NESTING_DEPTH {
        return Err(nom::Err::Failure(WktParseError::TooDeep { input }));
    }

    let (rest, keyword) =
        preceded(multispace0, take_till1::<_, _, WktParseError<'_>>(is_token_end))(input)?;

    let empty: PResult<'_, &str> = preceded(multispace1, tag("EMPTY"))(rest);
    if KEYWORDS.contains(&keyword) && empty.is_ok() {
        return fail(ShpError::EmptyGeometry);
    }

    match keyword {
        "POINT" => {
            let (rest, point) = point_body(rest)?;
            Ok((rest, PointShape::new(point).into()))
        }
        "LINESTRING" | "MULTILINESTRING" => {
            let (rest, parts) = linestring_body(rest)?;
            finish(rest, PolyLine::from_parts(parts).map(Shape::from))
        }
        "POLYGON" => {
            let (rest, rings) = polygon_body(rest)?;
            finish(rest, Polygon::from_rings(rings).map(Shape::from))
        }
        "MULTIPOLYGON" => {
            let (rest, polygons) = multipolygon_body(rest)?;
            finish(rest, build_multipolygon(polygons))
        }
        "GEOMETRYCOLLECTION" => {
            let (rest, members) = collection_body(rest, depth)?;
            finish(rest, GeometryCollection::new(members).map(Shape::from))
        }
        other => fail(ShpError::UnsupportedGeometryType(other.to_string())),
    }
}

fn top_level(input: &str) -> PResult<'_, Shape> {
    geometry(input, 0)
}

/// Parse a WKT document into a [`Shape`].
///
/// Surrounding whitespace is ignored. Errors:
/// - `UnsupportedGeometryType` for an unknown leading keyword
/// - `MalformedNumber` for a coordinate that is not a finite number
/// - `EmptyGeometry` for `... EMPTY` bodies
/// - `MalformedWkt` for any structural problem (parentheses, separators,
///   trailing text)
pub fn parse_wkt(text: &str) -> Result<Shape> {
    let text = text.trim();
    if text.is_empty() {
        return Err(ShpError::MalformedWkt {
            offset: 0,
            message: "empty input".to_string(),
        });
    }

    match all_consuming(terminated(top_level, multispace0))(text) {
        Ok((_, shape)) => {
            log::debug!(
                "parsed {} into {} record(s)",
                shape.as_geometry().wkt_type(),
                shape.count()
            );
            Ok(shape)
        }
        Err(nom::Err::Error(e)) | Err(nom::Err::Failure(e)) => Err(e.into_shp_error(text)),
        Err(nom::Err::Incomplete(_)) => Err(ShpError::MalformedWkt {
            offset: text.len(),
            message: "unexpected end of input".to_string(),
        }),
    }
}
