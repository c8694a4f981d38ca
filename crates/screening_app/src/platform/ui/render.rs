use screening_core::{
    AppViewModel, CandidateResult, CandidateRowView, NotificationLevel, Phase, RoiPanelView,
    ScoreBand, StepStatus,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineStyle {
    Plain,
    Header,
    Muted,
    Success,
    Info,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub style: LineStyle,
    pub text: String,
}

impl Line {
    fn new(style: LineStyle, text: impl Into<String>) -> Self {
        Self {
            style,
            text: text.into(),
        }
    }

    fn plain(text: impl Into<String>) -> Self {
        Self::new(LineStyle::Plain, text)
    }

    fn header(text: impl Into<String>) -> Self {
        Self::new(LineStyle::Header, text)
    }

    fn muted(text: impl Into<String>) -> Self {
        Self::new(LineStyle::Muted, text)
    }
}

pub fn render(view: &AppViewModel) -> Vec<Line> {
    let mut lines = match view.phase {
        Phase::Intake => render_intake(view),
        Phase::Processing => render_loader(view),
        Phase::Results => render_results(view),
    };

    if view.exporting {
        lines.push(Line::new(LineStyle::Info, "Exporting..."));
    }
    if let Some(note) = &view.notification {
        let style = match note.level {
            NotificationLevel::Success => LineStyle::Success,
            NotificationLevel::Error => LineStyle::Error,
        };
        lines.push(Line::new(style, note.text.clone()));
    }
    lines
}

fn render_intake(view: &AppViewModel) -> Vec<Line> {
    let mut lines = Vec::new();
    if view.files.is_empty() {
        let title = if view.drag_over {
            "Drop your files here"
        } else {
            "Upload Resume Files"
        };
        lines.push(Line::header(title));
        lines.push(Line::muted("Supports PDF, DOC, DOCX formats"));
    } else {
        lines.push(Line::header(format!("Selected Files ({})", view.files.len())));
        for row in &view.files {
            lines.push(Line::plain(format!(
                "  [{}] {}  {}",
                row.index, row.name, row.size_label
            )));
        }
    }

    if let Some(panel) = &view.roi {
        lines.extend(render_roi(panel));
    }
    lines
}

fn render_loader(view: &AppViewModel) -> Vec<Line> {
    let mut lines = vec![Line::header("Processing Your Resumes")];
    let Some(loader) = &view.loader else {
        return lines;
    };

    lines.push(Line::muted(loader.headline.clone()));
    for step in &loader.steps {
        let (marker, style) = match step.status {
            StepStatus::Complete => ("[x]", LineStyle::Success),
            StepStatus::Active => ("[>]", LineStyle::Info),
            StepStatus::Pending => ("[ ]", LineStyle::Muted),
        };
        lines.push(Line::new(
            style,
            format!("  {marker} {} - {}", step.title, step.detail),
        ));
    }
    lines
}

fn render_results(view: &AppViewModel) -> Vec<Line> {
    let mut lines = vec![Line::header("Analysis Complete!")];
    if let Some(summary) = &view.summary {
        lines.push(Line::muted(summary.clone()));
    }
    for row in &view.results {
        lines.push(render_row(row));
    }
    if let Some(candidate) = &view.selected {
        lines.extend(render_details(candidate));
    }
    lines
}

fn band_style(band: ScoreBand) -> LineStyle {
    match band {
        ScoreBand::Excellent => LineStyle::Success,
        ScoreBand::Good => LineStyle::Info,
        ScoreBand::Fair => LineStyle::Warning,
        ScoreBand::Poor => LineStyle::Error,
    }
}

fn render_row(row: &CandidateRowView) -> Line {
    let marker = if row.selected { '*' } else { ' ' };
    let mut skills = row.skills_preview.join(", ");
    if row.more_skills > 0 {
        skills.push_str(&format!(" +{} more", row.more_skills));
    }
    Line::new(
        band_style(row.band),
        format!(
            "{marker} #{} {} ({})  {}% Match [{}]  {}  {}",
            row.id,
            row.name,
            row.filename,
            row.score,
            row.band.label(),
            row.experience,
            skills
        ),
    )
}

fn render_details(candidate: &CandidateResult) -> Vec<Line> {
    vec![
        Line::header(format!(
            "Candidate Details: {} ({}% Match)",
            candidate.name, candidate.score
        )),
        Line::plain(format!("  Email:      {}", candidate.email)),
        Line::plain(format!("  Phone:      {}", candidate.phone)),
        Line::plain(format!("  Experience: {}", candidate.experience)),
        Line::plain(format!("  Domain:     {}", candidate.domain)),
        Line::plain(format!("  Skills:     {}", candidate.skills.join(", "))),
        Line::plain(format!("  Software:   {}", candidate.software.join(", "))),
    ]
}

pub fn render_roi(panel: &RoiPanelView) -> Vec<Line> {
    let report = &panel.report;
    let savings_style = if report.monthly_savings >= 0.0 {
        LineStyle::Success
    } else {
        LineStyle::Warning
    };
    vec![
        Line::header("ROI Calculator"),
        Line::muted(format!(
            "  {} resumes/month, {} min each, {}/hour",
            format_with_commas(f64::from(panel.inputs.monthly_resumes)),
            panel.inputs.minutes_per_resume,
            panel.inputs.hourly_rate
        )),
        Line::plain(format!(
            "  Manual cost/month:  {}",
            format_money(report.manual_cost)
        )),
        Line::plain(format!(
            "  Service cost/month: {}",
            format_money(report.service_cost)
        )),
        Line::new(
            savings_style,
            format!("  Monthly savings:    {}", format_money(report.monthly_savings)),
        ),
        Line::new(
            savings_style,
            format!("  Annual savings:     {}", format_money(report.annual_savings)),
        ),
        Line::new(savings_style, format!("  ROI:                {:.0}%", report.roi_percent)),
    ]
}

fn format_money(value: f64) -> String {
    format!("₹{}", format_with_commas(value))
}

/// Rounds to a whole number and groups thousands: `-1,250`.
fn format_with_commas(value: f64) -> String {
    let rounded = value.round();
    let digits = format!("{:.0}", rounded.abs());
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if rounded < 0.0 {
        out.push('-');
    }
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
