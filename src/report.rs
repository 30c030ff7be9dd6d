use crate::compare::Comparison;
use crate::model::Method;
use anyhow::Result;
use derive_builder::Builder;
use pretty_dtoa::{dtoa, FmtFloatConfig};
use std::io::Write;

const RATIO_CONFIG: FmtFloatConfig = FmtFloatConfig::default()
    .add_point_zero(false)
    .max_significant_digits(6);

pub fn format_ratio(ratio: Option<f64>) -> String {
    match ratio {
        Some(r) => dtoa(r, RATIO_CONFIG),
        None => "-".to_string(),
    }
}

/// Writes `<name> estimated operations: <count>` for one method.
pub fn write_estimate(w: &mut impl Write, method: Method, n: i64) -> Result<()> {
    let model = method.model();
    writeln!(w, "{} estimated operations: {}", model.name(), model.cost(n))?;
    Ok(())
}

/// Writes the estimate line for both methods, elimination first.
pub fn write_estimates(w: &mut impl Write, n: i64) -> Result<()> {
    for method in Method::all() {
        write_estimate(w, method, n)?;
    }
    Ok(())
}

pub fn write_comparison(w: &mut impl Write, c: &Comparison) -> Result<()> {
    let preferred = c.preferred().model();
    writeln!(w, "Extra operations for inverse method: {}", c.extra_work())?;
    writeln!(w, "Inverse/Gaussian ratio: {}", format_ratio(c.ratio()))?;
    writeln!(
        w,
        "Preferred method: {} ({})",
        preferred.name(),
        preferred.complexity()
    )?;
    Ok(())
}

/// Range of system sizes for a sweep table.
#[derive(Debug, Clone, Builder)]
#[builder(default, build_fn(validate = "Self::validate"))]
pub struct TableOpts {
    pub start: i64,
    pub end: i64,
    pub step: i64,
}

impl Default for TableOpts {
    fn default() -> Self {
        Self {
            start: 1,
            end: 10,
            step: 1,
        }
    }
}

impl TableOptsBuilder {
    fn validate(&self) -> Result<(), String> {
        let d = TableOpts::default();
        let start = self.start.unwrap_or(d.start);
        let end = self.end.unwrap_or(d.end);
        let step = self.step.unwrap_or(d.step);
        if step <= 0 {
            return Err(format!("step ({}) must be positive", step));
        }
        if start > end {
            return Err(format!("start ({}) must not exceed end ({})", start, end));
        }
        Ok(())
    }
}

impl TableOpts {
    pub fn sizes(&self) -> impl Iterator<Item = i64> {
        let step = self.step.max(1) as usize;
        (self.start..=self.end).step_by(step)
    }
}

/// Rows are exact for every `i64` size, so the only failure is the writer's.
pub fn write_table(w: &mut impl Write, opts: &TableOpts) -> Result<()> {
    writeln!(w, "{:>8} {:>20} {:>20} {:>10}", "n", "gaussian", "inverse", "ratio")?;
    for n in opts.sizes() {
        let c = Comparison::new(n);
        writeln!(
            w,
            "{:>8} {:>20} {:>20} {:>10}",
            c.n,
            c.gaussian,
            c.inverse,
            format_ratio(c.ratio())
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(f: impl FnOnce(&mut Vec<u8>) -> Result<()>) -> Result<String> {
        let mut buf = Vec::new();
        f(&mut buf)?;
        Ok(String::from_utf8(buf)?)
    }

    #[test]
    fn test_estimates_100() -> Result<()> {
        let out = render(|w| write_estimates(w, 100))?;
        assert_eq!(
            out,
            "Gaussian Elimination estimated operations: 495000\n\
             Inverse Method estimated operations: 1010000\n"
        );
        Ok(())
    }

    #[test]
    fn test_single_estimate() -> Result<()> {
        let out = render(|w| write_estimate(w, Method::Inverse, 1))?;
        assert_eq!(out, "Inverse Method estimated operations: 2\n");
        Ok(())
    }

    #[test]
    fn test_estimates_beyond_i64() -> Result<()> {
        let out = render(|w| write_estimates(w, 3_000_000))?;
        assert_eq!(
            out,
            "Gaussian Elimination estimated operations: 13499995500000000000\n\
             Inverse Method estimated operations: 27000009000000000000\n"
        );
        assert!(render(|w| write_estimates(w, i64::MAX)).is_ok());
        Ok(())
    }

    #[test]
    fn test_comparison_block() -> Result<()> {
        let c = Comparison::new(3);
        let out = render(|w| write_comparison(w, &c))?;
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "Extra operations for inverse method: 27");
        assert_eq!(lines[1], "Inverse/Gaussian ratio: 4");
        assert_eq!(lines[2], "Preferred method: Gaussian Elimination (O(n^3))");
        Ok(())
    }

    #[test]
    fn test_undefined_ratio() {
        assert_eq!(format_ratio(None), "-");
        assert_eq!(format_ratio(Some(6.0)), "6");
    }

    #[test]
    fn test_table() -> Result<()> {
        let opts = TableOptsBuilder::default().start(0).end(6).step(3).build()?;
        let out = render(|w| write_table(w, &opts))?;
        let rows: Vec<Vec<&str>> = out
            .lines()
            .skip(1)
            .map(|l| l.split_whitespace().collect())
            .collect();
        assert_eq!(
            rows,
            vec![
                vec!["0", "0", "0", "-"],
                vec!["3", "9", "36", "4"],
                vec!["6", "90", "252", "2.8"],
            ]
        );
        Ok(())
    }

    #[test]
    fn test_table_large_sweep_complete() -> Result<()> {
        let opts = TableOptsBuilder::default()
            .start(2_000_000)
            .end(4_000_000)
            .step(1_000_000)
            .build()?;
        let out = render(|w| write_table(w, &opts))?;
        let rows: Vec<Vec<&str>> = out
            .lines()
            .skip(1)
            .map(|l| l.split_whitespace().collect())
            .collect();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[1][..3], ["3000000", "13499995500000000000", "27000009000000000000"]);
        Ok(())
    }

    #[test]
    fn test_table_opts_validation() {
        assert!(TableOptsBuilder::default().step(0).build().is_err());
        assert!(TableOptsBuilder::default().start(5).end(4).build().is_err());

        let opts = TableOptsBuilder::default().build().unwrap();
        assert_eq!(opts.sizes().collect::<Vec<_>>(), (1..=10).collect::<Vec<_>>());
    }
}
