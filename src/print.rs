//! Console tables for squad reports.

use stanza::style::HAlign::Left;
use stanza::style::{HAlign, Header, MinWidth, Separator, Styles};
use stanza::table::{Col, Row, Table};

use crate::radar::ATTRIBUTES;
use crate::report::SquadReport;

pub fn tabulate_leaderboard(report: &SquadReport) -> Table {
    let mut table = Table::default()
        .with_cols(vec![
            Col::new(Styles::default().with(MinWidth(4)).with(HAlign::Right)),
            Col::new(Styles::default().with(MinWidth(16)).with(Left)),
            Col::new(Styles::default().with(MinWidth(10)).with(Left)),
            Col::new(Styles::default().with(MinWidth(6)).with(HAlign::Right)),
            Col::new(Styles::default().with(MinWidth(8)).with(Left)),
            Col::new(Styles::default().with(MinWidth(6)).with(HAlign::Right)),
            Col::new(Styles::default().with(MinWidth(6)).with(HAlign::Right)),
            Col::new(Styles::default().with(MinWidth(6)).with(HAlign::Right)),
            Col::new(Styles::default().with(MinWidth(6)).with(HAlign::Right)),
            Col::new(Styles::default().with(MinWidth(6)).with(HAlign::Right)),
            Col::new(Styles::default().with(MinWidth(6)).with(HAlign::Right)),
        ])
        .with_row(Row::new(
            Styles::default().with(Header(true)).with(Separator(true)),
            vec![
                "#".into(),
                "Player".into(),
                "Position".into(),
                "Rating".into(),
                "Form".into(),
                "Score".into(),
                "G/game".into(),
                "A/game".into(),
                "Min/game".into(),
                "CS%".into(),
                "Disc.".into(),
            ],
        ));
    for (index, player) in report.leaderboard().into_iter().enumerate() {
        let report = &player.report;
        table.push_row(Row::new(
            Styles::default(),
            vec![
                format!("{}", index + 1).into(),
                player.name.clone().into(),
                report.position.to_string().into(),
                format!("{:.1}", report.rating).into(),
                format!("{} ({})", report.form.form, report.form.trend).into(),
                format!("{:.2}", report.form.form_score).into(),
                format!("{:.2}", report.derived.goals_per_game).into(),
                format!("{:.2}", report.derived.assists_per_game).into(),
                format!("{}", report.derived.minutes_per_game).into(),
                format!("{}", report.derived.clean_sheet_rate).into(),
                format!("{}", report.derived.discipline_score).into(),
            ],
        ));
    }
    table
}

pub fn tabulate_radar(report: &SquadReport) -> Table {
    let mut table = Table::default()
        .with_cols({
            let mut cols = vec![Col::new(Styles::default().with(MinWidth(16)).with(Left))];
            for _ in ATTRIBUTES {
                cols.push(Col::new(
                    Styles::default().with(MinWidth(8)).with(HAlign::Right),
                ));
            }
            cols
        })
        .with_row({
            let mut header_cells = vec!["Player".into()];
            for attribute in ATTRIBUTES {
                header_cells.push(attribute.subject().into());
            }
            Row::new(
                Styles::default().with(Header(true)).with(Separator(true)),
                header_cells,
            )
        });
    for player in &report.players {
        let mut row_cells = vec![player.name.clone().into()];
        for data in player.report.radar.iter() {
            row_cells.push(format!("{}", data.value).into());
        }
        table.push_row(Row::new(Styles::default(), row_cells));
    }
    table
}

pub fn tabulate_position_averages(report: &SquadReport) -> Table {
    let mut table = Table::default()
        .with_cols(vec![
            Col::new(Styles::default().with(MinWidth(10)).with(Left)),
            Col::new(Styles::default().with(MinWidth(6)).with(HAlign::Right)),
        ])
        .with_row(Row::new(
            Styles::default().with(Header(true)),
            vec!["Position".into(), "Rating".into()],
        ));
    for (position, rating) in report.position_averages() {
        table.push_row(Row::new(
            Styles::default(),
            vec![position.to_string().into(), format!("{rating:.1}").into()],
        ));
    }
    table
}

#[cfg(test)]
mod tests {
    use stanza::renderer::console::Console;
    use stanza::renderer::Renderer;

    use super::*;
    use crate::report::{Analyser, Squad, SquadEntry};
    use crate::stats::{PlayerStats, Position};
    use crate::testing::{goalkeeper, striker};

    fn report() -> SquadReport {
        Analyser::default().analyse_squad(&Squad {
            players: vec![
                SquadEntry {
                    name: "Keeper".into(),
                    position: Position::Goalkeeper,
                    stats: goalkeeper(),
                },
                SquadEntry {
                    name: "Striker".into(),
                    position: Position::Forward,
                    stats: striker(),
                },
                SquadEntry {
                    name: "Trialist".into(),
                    position: Position::Midfielder,
                    stats: PlayerStats::default(),
                },
            ],
        })
    }

    #[test]
    fn leaderboard_rows() {
        let table = tabulate_leaderboard(&report());
        let rendered = Console::default().render(&table).to_string();
        assert!(rendered.contains("Striker"), "{rendered}");
        assert!(rendered.contains("7.2"), "{rendered}");
        assert!(rendered.contains("cold (down)"), "{rendered}");
    }

    #[test]
    fn radar_rows() {
        let table = tabulate_radar(&report());
        let rendered = Console::default().render(&table).to_string();
        assert!(rendered.contains("Shooting"), "{rendered}");
        assert!(rendered.contains("Trialist"), "{rendered}");
        assert!(rendered.contains("Duels"), "{rendered}");
    }

    #[test]
    fn position_average_rows() {
        let table = tabulate_position_averages(&report());
        let rendered = Console::default().render(&table).to_string();
        assert!(rendered.contains("midfielder"), "{rendered}");
        assert!(rendered.contains("6.0"), "{rendered}");
    }
}
