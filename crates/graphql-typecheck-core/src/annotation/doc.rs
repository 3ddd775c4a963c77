/// A layout document in the style of Wadler's "prettier printer": text
/// fragments plus line breaks that a [`DocPrinter`] either renders flat or
/// breaks, one [`Doc::Group`] at a time.
#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Doc {
    /// Like [`Doc::Indent`], but by a fixed number of spaces.
    Align(usize, Box<Doc>),
    Concat(Vec<Doc>),
    /// Printed flat when its contents (plus whatever follows on the same
    /// line) fit in the remaining width; otherwise its lines break.
    Group(Box<Doc>),
    /// Chooses between two documents depending on whether the enclosing
    /// group broke.
    IfBreak {
        broken: Box<Doc>,
        flat: Box<Doc>,
    },
    Indent(Box<Doc>),
    /// A space when flat, a newline when broken.
    Line,
    /// Nothing when flat, a newline when broken.
    SoftLine,
    Text(String),
}

pub(crate) fn align(width: usize, doc: Doc) -> Doc {
    Doc::Align(width, Box::new(doc))
}

pub(crate) fn concat(docs: Vec<Doc>) -> Doc {
    Doc::Concat(docs)
}

pub(crate) fn group(doc: Doc) -> Doc {
    Doc::Group(Box::new(doc))
}

pub(crate) fn if_break(broken: Doc, flat: Doc) -> Doc {
    Doc::IfBreak {
        broken: Box::new(broken),
        flat: Box::new(flat),
    }
}

pub(crate) fn indent(doc: Doc) -> Doc {
    Doc::Indent(Box::new(doc))
}

pub(crate) fn join(separator: Doc, docs: Vec<Doc>) -> Doc {
    let mut joined = Vec::with_capacity(docs.len() * 2);
    for (i, doc) in docs.into_iter().enumerate() {
        if i > 0 {
            joined.push(separator.clone());
        }
        joined.push(doc);
    }
    Doc::Concat(joined)
}

pub(crate) fn text(value: impl Into<String>) -> Doc {
    Doc::Text(value.into())
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum Mode {
    Break,
    Flat,
}

/// Nesting (in spaces past `indentation`), mode, document.
type Command<'doc> = (usize, Mode, &'doc Doc);

/// Renders a [`Doc`] to text.
///
/// Output starts at `start_column` on a line whose leading whitespace is
/// `indentation`; every broken line is prefixed with that indentation plus
/// one `tab_width` step per enclosing [`Doc::Indent`] and the width of every
/// enclosing [`Doc::Align`]. `trailing_width`
/// reserves room after the last character for the text that follows the
/// document on its final line.
pub(crate) struct DocPrinter<'a> {
    pub indentation: &'a str,
    pub print_width: usize,
    pub tab_width: usize,
    pub trailing_width: usize,
}
impl DocPrinter<'_> {
    pub fn print(&self, doc: &Doc, start_column: usize) -> String {
        let mut out = String::new();
        let mut column = start_column;
        let mut commands: Vec<Command<'_>> = vec![(0, Mode::Break, doc)];

        while let Some((nesting, mode, doc)) = commands.pop() {
            match doc {
                Doc::Text(value) => {
                    out.push_str(value);
                    column += text_width(value);
                },

                Doc::Concat(parts) => {
                    commands.extend(parts.iter().rev().map(|part| (nesting, mode, part)));
                },

                Doc::Align(width, inner) => commands.push((nesting + width, mode, inner.as_ref())),

                Doc::Indent(inner) => {
                    commands.push((nesting + self.tab_width, mode, inner.as_ref()));
                },

                Doc::Group(inner) => {
                    let mode = match mode {
                        Mode::Flat => Mode::Flat,
                        Mode::Break => {
                            let remaining = self.print_width as isize - column as isize;
                            if self.fits(inner, &commands, remaining) {
                                Mode::Flat
                            } else {
                                Mode::Break
                            }
                        },
                    };
                    commands.push((nesting, mode, inner.as_ref()));
                },

                Doc::IfBreak { broken, flat } => {
                    let chosen = match mode {
                        Mode::Break => broken.as_ref(),
                        Mode::Flat => flat.as_ref(),
                    };
                    commands.push((nesting, mode, chosen));
                },

                Doc::Line | Doc::SoftLine => match mode {
                    Mode::Flat => {
                        if *doc == Doc::Line {
                            out.push(' ');
                            column += 1;
                        }
                    },
                    Mode::Break => {
                        let trimmed_len = out.trim_end_matches([' ', '\t']).len();
                        out.truncate(trimmed_len);
                        out.push('\n');
                        out.push_str(self.indentation);
                        out.push_str(&" ".repeat(nesting));
                        column = text_width(self.indentation) + nesting;
                    },
                },
            }
        }

        out
    }

    /// Whether `doc`, printed flat, fits in `remaining` columns together
    /// with the rest of the current line (taken from the pending `rest`
    /// commands in their own modes).
    fn fits(&self, doc: &Doc, rest: &[Command<'_>], mut remaining: isize) -> bool {
        let mut rest_index = rest.len();
        let mut pending: Vec<(Mode, &Doc)> = vec![(Mode::Flat, doc)];

        loop {
            if remaining < 0 {
                return false;
            }

            let (mode, doc) = match pending.pop() {
                Some(command) => command,
                None => {
                    if rest_index == 0 {
                        return remaining >= self.trailing_width as isize;
                    }
                    rest_index -= 1;
                    let (_, mode, doc) = rest[rest_index];
                    (mode, doc)
                },
            };

            match doc {
                Doc::Text(value) => remaining -= text_width(value) as isize,
                Doc::Concat(parts) => {
                    pending.extend(parts.iter().rev().map(|part| (mode, part)));
                },
                Doc::Align(_, inner)
                    | Doc::Group(inner)
                    | Doc::Indent(inner) => pending.push((mode, inner.as_ref())),
                Doc::IfBreak { broken, flat } => {
                    let chosen = match mode {
                        Mode::Break => broken.as_ref(),
                        Mode::Flat => flat.as_ref(),
                    };
                    pending.push((mode, chosen));
                },
                Doc::Line | Doc::SoftLine => match mode {
                    Mode::Break => return true,
                    Mode::Flat => {
                        if *doc == Doc::Line {
                            remaining -= 1;
                        }
                    },
                },
            }
        }
    }
}

pub(crate) fn text_width(value: &str) -> usize {
    value.chars().count()
}
