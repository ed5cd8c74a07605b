//! RcDoc-based lambda notation with termcolor annotations.
//!
//! Role
//! - Render every encoding of the crate as the lambda term it stands for: primitives as their
//!   normal form (`λa.λb.a`, `λf.λx.f (f x)`), combinators as prefix applications
//!   (`NOT (λa.λb.a)`, `SUCC (λf.λx.x)`).
//! - Normal forms are produced by applying the encoding itself to symbolic payloads, so a runtime
//!   [`AnyNumeral`] renders just like the static numeral it was built from.
//! - Provide colored output for terminals (TTY-aware) and plain strings for logs/tests.
//!
//! This is display only. Nothing here parses or reduces terms.
use std::io::{self, Write};

use either::Either;
use pretty::{FmtWrite, RcDoc, RenderAnnotated};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::{
    logic::{self, pair},
    numeral::{AnyNumeral, IsZero, Numeral, One, Succ, Three, Two, Zero},
    selector::{False, Selector, True},
};

/// Styles used to annotate parts of the rendered document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    Punct, // dots after binders
    /// Parentheses are colored by nesting depth so matching pairs share a color.
    Paren(u8),
    Binder,  // λ
    Keyword, // NOT, AND, SUCC, ...
    Ident,   // bound variables
}

impl Style {
    fn to_color_spec(self) -> ColorSpec {
        let mut s = ColorSpec::new();
        match self {
            Style::Punct => {
                s.set_dimmed(true);
            }
            Style::Paren(depth) => {
                let fg = match depth % 6 {
                    0 => Color::Blue,
                    1 => Color::Green,
                    2 => Color::White,
                    3 => Color::Yellow,
                    4 => Color::Red,
                    _ => Color::Magenta,
                };
                s.set_fg(Some(fg)).set_dimmed(true);
            }
            Style::Binder => {
                s.set_fg(Some(Color::Yellow)).set_bold(true);
            }
            Style::Keyword => {
                s.set_fg(Some(Color::Cyan)).set_bold(true);
            }
            Style::Ident => {
                s.set_fg(Some(Color::Green));
            }
        }
        s
    }
}

fn styled(style: Style, s: &'static str) -> RcDoc<'static, Style> {
    RcDoc::as_string(s).annotate(style)
}

#[inline]
fn lparen(depth: u8) -> RcDoc<'static, Style> {
    RcDoc::as_string("(").annotate(Style::Paren(depth))
}

#[inline]
fn rparen(depth: u8) -> RcDoc<'static, Style> {
    RcDoc::as_string(")").annotate(Style::Paren(depth))
}

fn kw(s: &'static str) -> RcDoc<'static, Style> {
    styled(Style::Keyword, s)
}

fn ident(s: &'static str) -> RcDoc<'static, Style> {
    styled(Style::Ident, s)
}

/// `λfirst.λsecond.body`
fn binder2(
    first: &'static str,
    second: &'static str,
    body: RcDoc<'static, Style>,
) -> RcDoc<'static, Style> {
    styled(Style::Binder, "λ")
        .append(ident(first))
        .append(styled(Style::Punct, "."))
        .append(styled(Style::Binder, "λ"))
        .append(ident(second))
        .append(styled(Style::Punct, "."))
        .append(body)
        .group()
}

fn operand<E: Notation>(e: &E, depth: u8) -> RcDoc<'static, Style> {
    lparen(depth)
        .append(e.notation(depth.saturating_add(1)))
        .append(rparen(depth))
}

fn unary<E: Notation>(name: &'static str, inner: &E, depth: u8) -> RcDoc<'static, Style> {
    kw(name)
        .append(RcDoc::space())
        .append(operand(inner, depth))
        .group()
}

fn binary<L: Notation, R: Notation>(
    name: &'static str,
    lhs: &L,
    rhs: &R,
    depth: u8,
) -> RcDoc<'static, Style> {
    kw(name)
        .append(RcDoc::space())
        .append(operand(lhs, depth))
        .append(RcDoc::line())
        .append(operand(rhs, depth))
        .group()
        .nest(2)
}

/// Normal form of a selector: `λa.λb.a` or `λa.λb.b`, read off by letting it choose.
pub fn selector_normal_form<S: Selector>(selector: &S) -> RcDoc<'static, Style> {
    let body = selector.select(ident("a"), ident("b"));
    binder2("a", "b", body)
}

/// Normal form of a numeral: `λf.λx.f (... x)`, read off by applying it to a symbolic step.
pub fn numeral_normal_form<N: Numeral>(numeral: &N) -> RcDoc<'static, Style> {
    let (body, _) = numeral.iterate(
        |(inner, applied): (RcDoc<'static, Style>, u8)| {
            let arg = if applied == 0 {
                inner
            } else {
                lparen(applied).append(inner).append(rparen(applied))
            };
            (
                ident("f").append(RcDoc::space()).append(arg),
                applied.saturating_add(1),
            )
        },
        (ident("x"), 0),
    );
    binder2("f", "x", body)
}

/// Encodings that know how to write themselves down.
pub trait Notation {
    /// Build the annotated document, coloring parentheses starting at `depth`.
    fn notation(&self, depth: u8) -> RcDoc<'static, Style>;
}

impl<T: Notation> Notation for &T {
    fn notation(&self, depth: u8) -> RcDoc<'static, Style> {
        (**self).notation(depth)
    }
}

impl<L: Notation, R: Notation> Notation for Either<L, R> {
    fn notation(&self, depth: u8) -> RcDoc<'static, Style> {
        match self {
            Either::Left(l) => l.notation(depth),
            Either::Right(r) => r.notation(depth),
        }
    }
}

macro_rules! impl_normal_form_notation {
    ($normal_form:ident: $($t:ident),+) => {
        $(
            impl Notation for $t {
                #[inline]
                fn notation(&self, _depth: u8) -> RcDoc<'static, Style> {
                    $normal_form(self)
                }
            }
        )+
    };
}

impl_normal_form_notation!(selector_normal_form: True, False);
impl_normal_form_notation!(numeral_normal_form: Zero, One, Two, Three, AnyNumeral);

impl<X: Notation> Notation for logic::Not<X> {
    fn notation(&self, depth: u8) -> RcDoc<'static, Style> {
        unary("NOT", &self.inner, depth)
    }
}

impl<X: Notation, Y: Notation> Notation for logic::And<X, Y> {
    fn notation(&self, depth: u8) -> RcDoc<'static, Style> {
        binary("AND", &self.lhs, &self.rhs, depth)
    }
}

impl<X: Notation, Y: Notation> Notation for logic::Or<X, Y> {
    fn notation(&self, depth: u8) -> RcDoc<'static, Style> {
        binary("OR", &self.lhs, &self.rhs, depth)
    }
}

impl<X: Notation> Notation for pair::Not<X> {
    fn notation(&self, depth: u8) -> RcDoc<'static, Style> {
        unary("PNOT", &self.inner, depth)
    }
}

impl<X: Notation, Y: Notation> Notation for pair::And<X, Y> {
    fn notation(&self, depth: u8) -> RcDoc<'static, Style> {
        binary("PAND", &self.lhs, &self.rhs, depth)
    }
}

impl<X: Notation, Y: Notation> Notation for pair::Or<X, Y> {
    fn notation(&self, depth: u8) -> RcDoc<'static, Style> {
        binary("POR", &self.lhs, &self.rhs, depth)
    }
}

impl<N: Notation> Notation for Succ<N> {
    fn notation(&self, depth: u8) -> RcDoc<'static, Style> {
        unary("SUCC", &self.inner, depth)
    }
}

impl<N: Notation> Notation for IsZero<N> {
    fn notation(&self, depth: u8) -> RcDoc<'static, Style> {
        unary("ISZERO", &self.inner, depth)
    }
}

// A writer that maps Style annotations to termcolor ColorSpec on a WriteColor sink.
struct ColorWriter<'w, W: WriteColor + Write> {
    out: &'w mut W,
}

impl<'a, 'w, W: WriteColor + Write> RenderAnnotated<'a, Style> for ColorWriter<'w, W> {
    fn push_annotation(&mut self, ann: &'a Style) -> io::Result<()> {
        self.out.set_color(&ann.to_color_spec())
    }
    fn pop_annotation(&mut self) -> io::Result<()> {
        self.out.reset()
    }
}

impl<'w, W: WriteColor + Write> pretty::Render for ColorWriter<'w, W> {
    type Error = io::Error;
    fn write_str(&mut self, s: &str) -> io::Result<usize> {
        self.out.write_all(s.as_bytes())?;
        Ok(s.len())
    }
    fn write_str_all(&mut self, s: &str) -> io::Result<()> {
        self.out.write_all(s.as_bytes())
    }
    fn fail_doc(&self) -> Self::Error {
        io::Error::other("render failed")
    }
}

fn render_to<W: WriteColor + Write>(
    doc: &RcDoc<'_, Style>,
    width: usize,
    out: &mut W,
) -> io::Result<()> {
    let mut cw = ColorWriter { out };
    doc.render_raw(width, &mut cw)
}

/// Width of the terminal, or 80 if it cannot be determined.
fn terminal_width() -> usize {
    term_size::dimensions().map(|(w, _)| w).unwrap_or(80)
}

/// Rendering conveniences for any [`Notation`].
pub trait PrettyNotation: Notation {
    /// Annotated document, for composing or rendering manually.
    fn pretty_doc(&self) -> RcDoc<'static, Style>;

    /// Render with colors to any termcolor writer at the given width.
    fn pretty_render_to<W: WriteColor + Write>(&self, width: usize, out: &mut W) -> io::Result<()>;

    /// Print to stdout with colors (TTY-aware), at the terminal width.
    fn pretty_print(&self) -> io::Result<()>;

    /// Plain string, no colors, 80 columns.
    fn pretty_string(&self) -> String;
}

impl<T: Notation> PrettyNotation for T {
    #[inline]
    fn pretty_doc(&self) -> RcDoc<'static, Style> {
        self.notation(0)
    }

    #[inline]
    fn pretty_render_to<W: WriteColor + Write>(&self, width: usize, out: &mut W) -> io::Result<()> {
        render_to(&self.pretty_doc(), width, out)
    }

    fn pretty_print(&self) -> io::Result<()> {
        let stdout = StandardStream::stdout(ColorChoice::Auto);
        let mut stdout = stdout.lock();
        self.pretty_render_to(terminal_width(), &mut stdout)
    }

    fn pretty_string(&self) -> String {
        let mut buf = String::new();
        let _ = self.pretty_doc().render_fmt(80, &mut buf);
        buf
    }
}

macro_rules! impl_display_for_type {
    (
        $($seg:ident)::+ $(
            < $($gen:ident),* >
        )?
    ) => {
        impl $(
            < $($gen: Notation),* >
        )? std::fmt::Display for $($seg)::+ $(< $($gen),* >)? {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                let mut w = FmtWrite::new(f);
                self.pretty_doc().render_raw(80, &mut w)
            }
        }
    };
}

impl_display_for_type!(True);
impl_display_for_type!(False);

impl_display_for_type!(logic::Not<X>);
impl_display_for_type!(logic::And<X, Y>);
impl_display_for_type!(logic::Or<X, Y>);
impl_display_for_type!(pair::Not<X>);
impl_display_for_type!(pair::And<X, Y>);
impl_display_for_type!(pair::Or<X, Y>);

impl_display_for_type!(Zero);
impl_display_for_type!(One);
impl_display_for_type!(Two);
impl_display_for_type!(Three);
impl_display_for_type!(AnyNumeral);
impl_display_for_type!(Succ<N>);
impl_display_for_type!(IsZero<N>);
