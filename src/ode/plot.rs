/// Rendering collaborator for solution plots. The numerical core knows
/// nothing about any graphics backend; callers that want a picture hand in
/// an implementor (terminal plotter, SVG writer, test recorder, ...).
pub trait LinePlot {
    /// Render `y` against `x` as a 2D line series with grid lines and an
    /// optional title.
    fn render(&mut self, x: &[f64], y: &[f64], label: Option<&str>);
}
