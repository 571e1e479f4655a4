/// Glossary overlay with selectable, speakable definitions.

pub struct GlossaryPanel {
    pub visible: bool,
    pub selected: usize,
}

impl GlossaryPanel {
    pub fn new() -> Self {
        Self {
            visible: false,
            selected: 0,
        }
    }

    pub fn toggle(&mut self) {
        self.visible = !self.visible;
        if self.visible {
            self.selected = 0;
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn select_next(&mut self) {
        if self.selected + 1 < GLOSSARY.len() {
            self.selected += 1;
        }
    }

    pub fn selected_entry(&self) -> (&'static str, &'static str) {
        GLOSSARY[self.selected.min(GLOSSARY.len() - 1)]
    }
}

impl Default for GlossaryPanel {
    fn default() -> Self {
        Self::new()
    }
}

/// Glossary content: (term, definition).
pub static GLOSSARY: &[(&str, &str)] = &[
    (
        "Complex number",
        "A number that can be written as a + bi, where i is a solution of \
         the equation x\u{00b2} + 1 = 0. There is no real number whose square \
         is negative, so i extends the reals into a plane.",
    ),
    (
        "Real and imaginary part",
        "Given z = a + bi, a is the real part and b is the imaginary part: \
         Re(z) = a and Im(z) = b. For z = 3 + 2i, Re(z) = 3 and Im(z) = 2.",
    ),
    (
        "Argand diagram",
        "The complex plane: complex numbers drawn as points or vectors, \
         with the real axis running horizontally and the imaginary axis \
         vertically. Every point on this board is one complex number.",
    ),
    (
        "Modulus",
        "The distance between the origin and the point z, written |z|. \
         For z = a + bi it equals the square root of a\u{00b2} + b\u{00b2}.",
    ),
    (
        "Argument",
        "The angle between the vector of z and the positive real axis, \
         written arg(z) or \u{03b8}. Shown here in degrees, multiples of \
         \u{03c0}, or radians.",
    ),
    (
        "Polar form",
        "Writing z by its modulus and argument: z = |z|(cos \u{03b8} + \
         i sin \u{03b8}). The same point, described by distance and angle \
         instead of coordinates.",
    ),
    (
        "Sum of complex numbers",
        "Adding component-wise: real parts together, imaginary parts \
         together. On the plane the sum is the diagonal of the \
         parallelogram spanned by the two vectors; the white marker \
         follows it as you drag.",
    ),
    (
        "Keys",
        "a adds a point, x removes the selected one. Drag markers with \
         the mouse, or nudge the selection with shift + arrows. u cycles \
         the angle unit, t toggles details, enter speaks the selected \
         number, s speaks the sum, e exports a snapshot, w and o save and \
         load the board, q quits.",
    ),
];
