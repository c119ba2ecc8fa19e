//! Text diagnostics for trials and their parameter space.

use serde::{Deserialize, Serialize};
use sf_types::{SfResult, TrialError};
use std::fmt::{self, Write as _};
use std::io;
use tracing::trace;

use crate::trial::Trial;

/// How numbers are turned into text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NumberFormat {
    /// Shortest round-trip form, always with a decimal point (`1.0`, `3.75`).
    Shortest,
    /// Shortest form without a forced decimal point (`1`, `3.75`).
    General,
    /// Fixed number of decimals.
    Fixed(usize),
}

impl NumberFormat {
    pub fn format(&self, value: f64) -> String {
        match *self {
            Self::Shortest => format!("{value:?}"),
            Self::General => format!("{value}"),
            Self::Fixed(precision) => format!("{value:.precision$}"),
        }
    }
}

impl Default for NumberFormat {
    fn default() -> Self {
        Self::Shortest
    }
}

/// Layout options for [`Trial::show_with`] and
/// [`Trial::show_parameters_with`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShowOptions {
    /// Minimum field width; numbers are right-justified within it.
    pub width: usize,
    pub format: NumberFormat,
}

impl Default for ShowOptions {
    fn default() -> Self {
        Self {
            width: 8,
            format: NumberFormat::default(),
        }
    }
}

impl ShowOptions {
    pub fn with_format(mut self, format: NumberFormat) -> Self {
        self.format = format;
        self
    }

    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    fn field(&self, value: f64) -> String {
        format!("{:>width$}", self.format.format(value), width = self.width)
    }
}

impl Trial {
    /// One-line summary: `Point: (  x0,   x1)\tFitness:    f`.
    pub fn render(&self, options: &ShowOptions) -> String {
        let mut out = String::from("Point: (");
        let coords: Vec<String> = self.point().iter().map(|&x| options.field(x)).collect();
        out.push_str(&coords.join(", "));
        out.push_str(")\t");
        let _ = writeln!(out, "Fitness: {}", options.field(self.fitness()));
        out
    }

    /// Write the one-line summary to `sink` with the default layout.
    pub fn show<W: io::Write + ?Sized>(&self, sink: &mut W) -> SfResult<()> {
        self.show_with(sink, &ShowOptions::default())
    }

    pub fn show_with<W: io::Write + ?Sized>(
        &self,
        sink: &mut W,
        options: &ShowOptions,
    ) -> SfResult<()> {
        trace!("Showing trial {}", self.id());
        sink.write_all(self.render(options).as_bytes())?;
        Ok(())
    }

    /// Header, dimension count, then one line per parameter with this trial's
    /// coordinate and the bounds.
    pub fn render_parameters(&self, options: &ShowOptions) -> Result<String, TrialError> {
        self.space().read(|space| {
            if self.point().len() != space.len() {
                return Err(TrialError::DimensionMismatch {
                    expected: space.len(),
                    actual: self.point().len(),
                });
            }

            let mut out = String::new();
            let _ = writeln!(out, "=== Parameter Space ===");
            let _ = writeln!(out, "Number of parameters: {}", space.len());
            for (param, &value) in space.parameters().iter().zip(self.point()) {
                let _ = writeln!(
                    out,
                    "Parameter {} has the value {} and is defined between {} and {}",
                    param.name,
                    options.format.format(value),
                    options.format.format(param.lower),
                    options.format.format(param.upper),
                );
            }
            Ok(out)
        })
    }

    /// Write the parameter table to `sink`. Nothing is written when the point
    /// does not match the space.
    pub fn show_parameters<W: io::Write + ?Sized>(&self, sink: &mut W) -> SfResult<()> {
        self.show_parameters_with(sink, &ShowOptions::default())
    }

    pub fn show_parameters_with<W: io::Write + ?Sized>(
        &self,
        sink: &mut W,
        options: &ShowOptions,
    ) -> SfResult<()> {
        let table = self.render_parameters(options)?;
        trace!("Showing parameter space of trial {}", self.id());
        sink.write_all(table.as_bytes())?;
        Ok(())
    }
}

/// Same text as [`Trial::show`], including the trailing line break.
impl fmt::Display for Trial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(&ShowOptions::default()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::SharedSpace;
    use crate::space::ParameterSpace;
    use sf_types::SfError;

    fn sample_trial() -> Trial {
        let space = ParameterSpace::new()
            .with_parameter("x", 5.0, 1.0)
            .with_parameter("y", -2.0, 2.0);
        Trial::with_space(space)
            .with_point(vec![1.0, 2.5])
            .with_fitness(3.75)
    }

    fn shown(trial: &Trial, options: &ShowOptions) -> String {
        let mut sink = Vec::new();
        trial.show_with(&mut sink, options).unwrap();
        String::from_utf8(sink).unwrap()
    }

    struct BrokenSink;

    impl io::Write for BrokenSink {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn number_formats() {
        assert_eq!(NumberFormat::Shortest.format(1.0), "1.0");
        assert_eq!(NumberFormat::Shortest.format(3.75), "3.75");
        assert_eq!(NumberFormat::General.format(1.0), "1");
        assert_eq!(NumberFormat::Fixed(3).format(2.5), "2.500");
        assert_eq!(NumberFormat::Fixed(0).format(-4.0), "-4");
    }

    #[test]
    fn show_layout() {
        let trial = sample_trial();
        assert_eq!(
            shown(&trial, &ShowOptions::default()),
            "Point: (     1.0,      2.5)\tFitness:     3.75\n"
        );
    }

    #[test]
    fn show_with_pinned_precision() {
        let trial = sample_trial();
        let options = ShowOptions::default().with_format(NumberFormat::Fixed(2));
        assert_eq!(
            shown(&trial, &options),
            "Point: (    1.00,     2.50)\tFitness:     3.75\n"
        );

        let general = ShowOptions::default().with_format(NumberFormat::General);
        assert_eq!(
            shown(&trial, &general),
            "Point: (       1,      2.5)\tFitness:     3.75\n"
        );
    }

    #[test]
    fn show_wide_values_are_not_truncated() {
        let trial = Trial::new(SharedSpace::default())
            .with_point(vec![123456789.5])
            .with_fitness(-0.125);
        assert_eq!(
            shown(&trial, &ShowOptions::default()),
            "Point: (123456789.5)\tFitness:   -0.125\n"
        );
    }

    #[test]
    fn show_empty_point() {
        let trial = Trial::new(SharedSpace::default());
        assert_eq!(
            shown(&trial, &ShowOptions::default()),
            "Point: ()\tFitness:      0.0\n"
        );
    }

    #[test]
    fn display_matches_show() {
        let trial = sample_trial();
        assert_eq!(trial.to_string(), shown(&trial, &ShowOptions::default()));
    }

    #[test]
    fn show_parameters_layout() {
        let trial = sample_trial();
        let mut sink = Vec::new();
        trial.show_parameters(&mut sink).unwrap();

        assert_eq!(
            String::from_utf8(sink).unwrap(),
            "=== Parameter Space ===\n\
             Number of parameters: 2\n\
             Parameter x has the value 1.0 and is defined between 1.0 and 5.0\n\
             Parameter y has the value 2.5 and is defined between -2.0 and 2.0\n"
        );
    }

    #[test]
    fn show_parameters_one_line_per_parameter_in_order() {
        let mut trial = Trial::new(SharedSpace::default());
        for name in ["alpha", "beta", "gamma", "delta"] {
            trial.add_parameter(name, 0.0, 1.0);
        }
        let table = trial.render_parameters(&ShowOptions::default()).unwrap();
        let lines: Vec<&str> = table
            .lines()
            .filter(|l| l.starts_with("Parameter "))
            .collect();

        assert_eq!(lines.len(), 4);
        for (line, name) in lines.iter().zip(["alpha", "beta", "gamma", "delta"]) {
            assert!(line.starts_with(&format!("Parameter {name} has the value 0.0")));
        }
    }

    #[test]
    fn show_parameters_rejects_stale_point() {
        let space = SharedSpace::new(ParameterSpace::new().with_parameter("x", 0.0, 1.0));
        let mut a = Trial::new(space.clone());
        let b = Trial::new(space);
        a.add_parameter("y", 0.0, 1.0);

        let mut sink = Vec::new();
        let err = b.show_parameters(&mut sink).unwrap_err();
        assert!(matches!(
            err,
            SfError::Trial(TrialError::DimensionMismatch {
                expected: 2,
                actual: 1
            })
        ));
        assert!(sink.is_empty());
    }

    #[test]
    fn printing_is_idempotent() {
        let trial = sample_trial();
        let options = ShowOptions::default();

        assert_eq!(shown(&trial, &options), shown(&trial, &options));
        assert_eq!(
            trial.render_parameters(&options).unwrap(),
            trial.render_parameters(&options).unwrap()
        );
        assert_eq!(trial.point(), &[1.0, 2.5]);
        assert_eq!(trial.fitness(), 3.75);
    }

    #[test]
    fn sink_failures_surface_as_io_errors() {
        let trial = sample_trial();
        assert!(matches!(trial.show(&mut BrokenSink), Err(SfError::Io(_))));
        assert!(matches!(
            trial.show_parameters(&mut BrokenSink),
            Err(SfError::Io(_))
        ));
    }

    #[test]
    fn options_deserialize_from_config() {
        let options: ShowOptions =
            serde_json::from_str(r#"{"width": 10, "format": {"Fixed": 4}}"#).unwrap();
        assert_eq!(
            options,
            ShowOptions::default()
                .with_width(10)
                .with_format(NumberFormat::Fixed(4))
        );
    }
}
