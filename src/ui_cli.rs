use std::io::{self, BufRead, Write};

use crate::app::AppError;
use crate::params::{PerformanceParams, PARAM_GROUPS, SAVING_PERCENT_RANGE};

/// 표준 입출력으로 모든 파라미터를 입력받는다.
pub fn prompt_params(base: PerformanceParams) -> Result<PerformanceParams, AppError> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();
    prompt_params_with(base, &mut input, &mut output)
}

/// 항목마다 현재 값을 보여주고 새 값을 받는다. 빈 입력은 현재 값을 유지한다.
///
/// 입력이 끝나면(EOF) 남은 항목은 현재 값을 그대로 쓴다.
pub fn prompt_params_with<R: BufRead, W: Write>(
    base: PerformanceParams,
    input: &mut R,
    output: &mut W,
) -> Result<PerformanceParams, AppError> {
    let mut params = base;
    writeln!(output, "\n=== Battery Efficiency & IMO Performance Calculator ===")?;
    writeln!(output, "엔터를 누르면 [ ] 안의 기본값을 사용합니다.")?;
    for (group, fields) in PARAM_GROUPS {
        writeln!(output, "\n-- {group} --")?;
        for field in fields.iter() {
            let Some(slot) = params.field_mut(field.name) else {
                continue;
            };
            let current = *slot;
            *slot = loop {
                let prompt = format!("{} [{}]: ", field.label, current);
                let Some(line) = read_line(input, output, &prompt)? else {
                    break current;
                };
                let text = line.trim();
                if text.is_empty() {
                    break current;
                }
                match text.parse::<f64>() {
                    Ok(v) if field.name == "saving_percent" && !SAVING_PERCENT_RANGE.contains(&v) => {
                        writeln!(
                            output,
                            "{}~{} 사이의 값을 입력하세요.",
                            SAVING_PERCENT_RANGE.start(),
                            SAVING_PERCENT_RANGE.end()
                        )?;
                    }
                    Ok(v) => break v,
                    Err(_) => writeln!(output, "숫자를 입력하세요.")?,
                }
            };
        }
    }
    Ok(params)
}

fn read_line<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> Result<Option<String>, AppError> {
    write!(output, "{prompt}")?;
    output.flush()?;
    let mut buf = String::new();
    if input.read_line(&mut buf)? == 0 {
        return Ok(None);
    }
    Ok(Some(buf))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn empty_lines_keep_defaults() {
        let mut input = Cursor::new("\n".repeat(18));
        let mut out = Vec::new();
        let p = prompt_params_with(PerformanceParams::default(), &mut input, &mut out).unwrap();
        assert_eq!(p, PerformanceParams::default());
    }

    #[test]
    fn typed_value_replaces_default_and_eof_keeps_rest() {
        // 첫 항목(battery_energy_kwh)만 입력
        let mut input = Cursor::new("500\n");
        let mut out = Vec::new();
        let p = prompt_params_with(PerformanceParams::default(), &mut input, &mut out).unwrap();
        assert_eq!(p.battery_energy_kwh, 500.0);
        assert_eq!(p.capex, 800000.0);
    }

    #[test]
    fn invalid_entries_reprompt() {
        // 첫 항목에 "abc" 후 "42"
        let mut input = Cursor::new("abc\n42\n");
        let mut out = Vec::new();
        let p = prompt_params_with(PerformanceParams::default(), &mut input, &mut out).unwrap();
        assert_eq!(p.battery_energy_kwh, 42.0);
        let shown = String::from_utf8(out).unwrap();
        assert!(shown.contains("숫자를 입력하세요."));
    }

    #[test]
    fn saving_percent_out_of_range_reprompts() {
        // saving_percent는 17번째 항목
        let mut lines = "\n".repeat(16);
        lines.push_str("35\n15\n");
        let mut input = Cursor::new(lines);
        let mut out = Vec::new();
        let p = prompt_params_with(PerformanceParams::default(), &mut input, &mut out).unwrap();
        assert_eq!(p.saving_percent, 15.0);
        assert!(String::from_utf8(out).unwrap().contains("0~20 사이의 값을 입력하세요."));
    }
}
