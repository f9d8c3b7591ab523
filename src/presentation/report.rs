// Plain-text rendering of dashboard views
use crate::domain::dashboard::{DashboardView, DeviationGroups, MapMarker};
use crate::domain::selection::{FilterOptions, Role};
use std::io::{self, Write};

pub const NO_DEVIATIONS: &str = "Отклонений не обнаружено";

pub fn section_title(role: Role) -> &'static str {
    match role {
        Role::Admin => "Все предприятия",
        Role::User => "Мое предприятие",
    }
}

/// ru-RU thousands grouping, e.g. 4351 -> "4 351" with a no-break space
pub fn format_count(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 * 2);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('\u{a0}');
        }
        out.push(ch);
    }
    out
}

pub struct ViewHeader<'a> {
    pub region_summary: &'a str,
    pub active_filter_count: usize,
}

pub fn write_view<W: Write>(
    out: &mut W,
    view: &DashboardView,
    header: &ViewHeader<'_>,
) -> io::Result<()> {
    writeln!(out, "{}", section_title(view.role))?;

    let card_title = match (view.role, view.filtered_enterprises.first()) {
        (Role::User, Some(enterprise)) => enterprise.name.as_str(),
        _ => "Сводная информация",
    };
    writeln!(out, "== {} ==", card_title)?;
    if view.role == Role::Admin && header.active_filter_count > 0 {
        writeln!(out, "Фильтры: {}", header.active_filter_count)?;
    }
    writeln!(out, "Регион: {}", header.region_summary)?;
    writeln!(out, "Сотрудников: {}", format_count(view.totals.employees))?;
    writeln!(out, "Статистика ремонта")?;
    writeln!(out, "  Завершено: {}", view.totals.completed)?;
    writeln!(out, "  В работе: {}", view.totals.pending)?;
    writeln!(out, "  Просрочено: {}", view.totals.overdue)?;
    writeln!(out, "Отклонения: {}", view.totals.deviation_count)?;

    if view.flattened_deviations.is_empty() {
        writeln!(out, "  {}", NO_DEVIATIONS)?;
        return Ok(());
    }

    for item in &view.flattened_deviations {
        let deviation = &item.deviation;
        writeln!(out, "  [{}] {}", deviation.status.label(), deviation.kind)?;
        if view.role == Role::Admin {
            writeln!(out, "    {}", item.enterprise_name)?;
        }
        writeln!(out, "    {}", deviation.description)?;
        writeln!(
            out,
            "    Срок: {}  Ответственный: {}",
            deviation.deadline_ru(),
            deviation.responsible
        )?;
    }

    write_group_counts(out, "По типам", &view.grouped_by_type)?;
    write_group_counts(out, "По ответственным", &view.grouped_by_responsible)
}

fn write_group_counts<W: Write>(out: &mut W, title: &str, groups: &DeviationGroups) -> io::Result<()> {
    if groups.is_empty() {
        return Ok(());
    }
    writeln!(out, "{}", title)?;
    for group in groups.iter() {
        writeln!(out, "  {}: {}", group.label, group.deviations.len())?;
    }
    Ok(())
}

pub fn write_options<W: Write>(out: &mut W, options: &FilterOptions) -> io::Result<()> {
    writeln!(out, "Регионы")?;
    for region in &options.regions {
        writeln!(out, "  {}", region)?;
    }
    writeln!(out, "Предприятия")?;
    for enterprise in &options.enterprises {
        writeln!(out, "  {}: {}", enterprise.id, enterprise.name)?;
    }
    writeln!(out, "Типы отклонений")?;
    for kind in &options.deviation_types {
        writeln!(out, "  {}", kind)?;
    }
    writeln!(out, "Ответственные")?;
    for name in &options.responsible_names {
        writeln!(out, "  {}", name)?;
    }
    Ok(())
}

pub fn write_markers<W: Write>(out: &mut W, markers: &[MapMarker]) -> io::Result<()> {
    for marker in markers {
        writeln!(
            out,
            "{}\t{}\t({}, {})\t{}",
            marker.enterprise_id,
            marker.label,
            marker.x,
            marker.y,
            marker.color()
        )?;
    }
    Ok(())
}
