//! Built-in block glyphs for the countdown message. Covers digits, the
//! letters appearing in "Today!", "N days" and "until Christmas", and
//! punctuation. Lowercase input falls back to the uppercase glyph.

pub const GLYPH_HEIGHT: usize = 5;

pub const GLYPHS: &[(char, [&str; GLYPH_HEIGHT])] = &[
    ('0', [" ## ", "#  #", "#  #", "#  #", " ## "]),
    ('1', [" # ", "## ", " # ", " # ", "###"]),
    ('2', [" ## ", "#  #", "  # ", " #  ", "####"]),
    ('3', ["### ", "   #", " ## ", "   #", "### "]),
    ('4', ["#  #", "#  #", "####", "   #", "   #"]),
    ('5', ["####", "#   ", "### ", "   #", "### "]),
    ('6', [" ## ", "#   ", "### ", "#  #", " ## "]),
    ('7', ["####", "   #", "  # ", "  # ", " #  "]),
    ('8', [" ## ", "#  #", " ## ", "#  #", " ## "]),
    ('9', [" ## ", "#  #", " ###", "   #", " ## "]),
    ('A', [" ## ", "#  #", "####", "#  #", "#  #"]),
    ('C', [" ###", "#   ", "#   ", "#   ", " ###"]),
    ('D', ["### ", "#  #", "#  #", "#  #", "### "]),
    ('H', ["#  #", "#  #", "####", "#  #", "#  #"]),
    ('I', ["###", " # ", " # ", " # ", "###"]),
    ('L', ["#   ", "#   ", "#   ", "#   ", "####"]),
    ('M', ["#   #", "## ##", "# # #", "#   #", "#   #"]),
    ('N', ["#   #", "##  #", "# # #", "#  ##", "#   #"]),
    ('O', [" ## ", "#  #", "#  #", "#  #", " ## "]),
    ('R', ["### ", "#  #", "### ", "#  #", "#  #"]),
    ('S', [" ###", "#   ", " ## ", "   #", "### "]),
    ('T', ["###", " # ", " # ", " # ", " # "]),
    ('U', ["#  #", "#  #", "#  #", "#  #", " ## "]),
    ('Y', ["#   #", " # # ", "  #  ", "  #  ", "  #  "]),
    ('!', ["#", "#", "#", " ", "#"]),
    (' ', ["   ", "   ", "   ", "   ", "   "]),
];

/// Unknown characters render as a solid block rather than failing.
pub const FALLBACK_GLYPH: [&str; GLYPH_HEIGHT] = ["####", "####", "####", "####", "####"];
