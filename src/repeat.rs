use crate::parser::Parser;
use crate::position::Position;
use crate::reader::Reader;
use crate::result::{Failure, ParseResult, Parsed};
use std::borrow::Cow;

/// Placeholder separator type for repetitions without one. Its parser
/// impl exists to satisfy the type system and is never invoked.
pub struct NoSeparator;

impl<'src> Parser<'src> for NoSeparator {
    type Output = ();

    fn parse(&self, reader: &mut Reader<'src>) -> ParseResult<'src, ()> {
        let position = reader.position();
        Ok(Parsed::new((), position, position))
    }

    fn describe(&self) -> Cow<'static, str> {
        Cow::Borrowed("nothing")
    }
}

/// Outcome of a completed repetition loop.
pub(crate) struct Run {
    pub start: Position,
    pub end: Position,
    pub can_backtrack: bool,
}

/// Shared repetition loop behind [`Repeat`] and [`crate::reduce::Reduce`].
///
/// Runs `item` (with `separator` between consecutive items) until a
/// failure, a zero-width match, or `max` items. An attempt is breakable
/// once more than `min` items already matched; breakable attempts are
/// marked before the separator, so stopping rewinds a dangling separator
/// and the reader ends exactly at the last kept item. Failures on
/// non-breakable attempts abort the whole repetition, with the
/// `can_backtrack` flag folded like a sequence: the inner failure's flag
/// AND every kept item's flag.
pub(crate) fn run<'src, P, S>(
    item: &P,
    separator: Option<&S>,
    min: usize,
    max: usize,
    reader: &mut Reader<'src>,
    mut accept: impl FnMut(P::Output),
) -> Result<Run, Failure<'src>>
where
    P: Parser<'src>,
    S: Parser<'src>,
{
    let start = reader.position();
    let mut flag = true;
    let mut count = 0;
    let mut attempt = 1;
    loop {
        let before = reader.position();
        let breakable = min < max && attempt > min;
        if breakable {
            reader.push_mark();
        }

        let mut sep_flag = true;
        if attempt > 1 {
            if let Some(sep) = separator {
                match sep.parse(reader) {
                    Ok(parsed) => sep_flag = parsed.can_backtrack,
                    Err(failure) => {
                        if breakable {
                            reader.reset();
                            reader.unmark();
                            break;
                        }
                        let can_backtrack = flag && failure.can_backtrack();
                        return Err(failure.with_backtrack(can_backtrack));
                    }
                }
            }
        }

        match item.parse(reader) {
            Ok(parsed) => {
                if breakable {
                    reader.unmark();
                }
                flag = flag && sep_flag && parsed.can_backtrack;
                count += 1;
                accept(parsed.value);
                if reader.position() == before {
                    // Zero-width match: a further attempt could never
                    // advance, so stop here instead of spinning.
                    if count >= min {
                        break;
                    }
                    return Err(Failure::new(
                        reader.source(),
                        format!(
                            "{} made no progress after {} of {} repetitions",
                            item.describe(),
                            count,
                            min
                        ),
                        reader.position(),
                    )
                    .with_backtrack(flag));
                }
            }
            Err(failure) => {
                if breakable {
                    reader.reset();
                    reader.unmark();
                    break;
                }
                let can_backtrack = flag && failure.can_backtrack();
                return Err(failure.with_backtrack(can_backtrack));
            }
        }

        if attempt == max {
            break;
        }
        attempt += 1;
    }
    Ok(Run {
        start,
        end: reader.position(),
        can_backtrack: flag,
    })
}

pub(crate) fn describe_counts(min: usize, max: usize, item: Cow<'static, str>) -> String {
    match (min, max) {
        (0, usize::MAX) => format!("zero or more of {}", item),
        (1, usize::MAX) => format!("one or more of {}", item),
        (min, usize::MAX) => format!("at least {} of {}", min, item),
        (min, max) if min == max => format!("exactly {} of {}", min, item),
        (min, max) => format!("between {} and {} of {}", min, max, item),
    }
}

/// Parser combinator that matches a parser repeatedly, collecting the
/// outputs into a vector.
///
/// The repetition succeeds when the number of consecutive matches lands
/// in `min..=max` and fails with the inner failure otherwise. With a
/// separator configured, the separator must appear between consecutive
/// items; a trailing separator is not consumed.
pub struct Repeat<P, S = NoSeparator> {
    parser: P,
    separator: Option<S>,
    min: usize,
    max: usize,
}

impl<P> Repeat<P> {
    /// A repetition of `min..=max` items with no separator.
    ///
    /// # Panics
    ///
    /// Panics if `max` is zero or `min` exceeds `max`.
    pub fn new(parser: P, min: usize, max: usize) -> Self {
        assert!(max >= 1, "maximum repetition count must be at least 1");
        assert!(
            min <= max,
            "minimum repetition count {} exceeds maximum {}",
            min,
            max
        );
        Repeat {
            parser,
            separator: None,
            min,
            max,
        }
    }
}

impl<P, S> Repeat<P, S> {
    /// Requires `separator` between consecutive items.
    pub fn separated_by<S2>(self, separator: S2) -> Repeat<P, S2> {
        Repeat {
            parser: self.parser,
            separator: Some(separator),
            min: self.min,
            max: self.max,
        }
    }
}

impl<'src, P, S> Parser<'src> for Repeat<P, S>
where
    P: Parser<'src>,
    S: Parser<'src>,
{
    type Output = Vec<P::Output>;

    fn parse(&self, reader: &mut Reader<'src>) -> ParseResult<'src, Vec<P::Output>> {
        let mut items = Vec::new();
        let run = run(
            &self.parser,
            self.separator.as_ref(),
            self.min,
            self.max,
            reader,
            |value| items.push(value),
        )?;
        Ok(Parsed::new(items, run.start, run.end).with_backtrack(run.can_backtrack))
    }

    fn describe(&self) -> Cow<'static, str> {
        Cow::Owned(describe_counts(self.min, self.max, self.parser.describe()))
    }
}

/// Extension trait to add repetition method support for parsers
pub trait RepeatExt<'src>: Parser<'src> + Sized {
    /// Matches this parser `min..=max` times.
    fn repeat(self, min: usize, max: usize) -> Repeat<Self> {
        Repeat::new(self, min, max)
    }
}

/// Implement RepeatExt for all parsers
impl<'src, P> RepeatExt<'src> for P where P: Parser<'src> {}

/// Convenience function to create a Repeat parser
pub fn repeat<'src, P>(parser: P, min: usize, max: usize) -> Repeat<P>
where
    P: Parser<'src>,
{
    Repeat::new(parser, min, max)
}

/// Matches `parser` exactly `count` times.
///
/// # Panics
///
/// Panics if `count` is zero.
pub fn exactly<'src, P>(parser: P, count: usize) -> Repeat<P>
where
    P: Parser<'src>,
{
    Repeat::new(parser, count, count)
}

/// Matches `parser` zero or more times.
pub fn many<'src, P>(parser: P) -> Repeat<P>
where
    P: Parser<'src>,
{
    Repeat::new(parser, 0, usize::MAX)
}

/// Matches `parser` one or more times.
pub fn some<'src, P>(parser: P) -> Repeat<P>
where
    P: Parser<'src>,
{
    Repeat::new(parser, 1, usize::MAX)
}
