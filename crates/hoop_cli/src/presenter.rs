//! Line-oriented rendering of the game board.

use hoop_core::view::{Banner, GuessView, HintView, ImageTreatment, PlayerHeader, Presenter, StatCell};
use hoop_core::GameStats;
use std::io::Write;

pub struct TerminalPresenter<W: Write> {
    out: W,
    input_enabled: bool,
    suggestions: Vec<String>,
}

impl<W: Write> TerminalPresenter<W> {
    pub fn new(out: W) -> Self {
        Self { out, input_enabled: false, suggestions: Vec::new() }
    }

    pub fn input_enabled(&self) -> bool {
        self.input_enabled
    }

    pub fn suggestions(&self) -> &[String] {
        &self.suggestions
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn line(&mut self, text: &str) {
        if let Err(e) = writeln!(self.out, "{}", text) {
            log::warn!("Terminal write failed: {}", e);
        }
    }

    fn header(&mut self, header: &PlayerHeader) {
        let line = format!(
            "{} | {} ({}) | {} | {}",
            header.name, header.country, header.flag_url, header.experience, header.image
        );
        self.line(&line);
    }

    fn cells(&mut self, cells: &[StatCell]) {
        let row = cells.iter().map(|c| c.to_string()).collect::<Vec<_>>().join("  ");
        self.line(&format!("  {}", row));
    }
}

impl<W: Write> Presenter for TerminalPresenter<W> {
    fn set_input_enabled(&mut self, enabled: bool) {
        self.input_enabled = enabled;
    }

    fn append_guess(&mut self, guess: &GuessView) {
        self.line(&format!("── {} ──", guess.title));
        self.header(&guess.header);
        self.cells(&guess.main_stats);
        self.cells(&guess.team_stats);
    }

    fn clear_guesses(&mut self) {
        self.line("");
    }

    fn show_banner(&mut self, banner: &Banner) {
        self.line("");
        self.line(&banner.message);
        if let Some(card) = &banner.player {
            self.header(&card.header);
            self.cells(&card.main_stats);
            self.cells(&card.team_stats);
        }
        self.line("Type :restart to play again or :mode <all|easy|medium|hard>.");
    }

    fn hide_banner(&mut self) {}

    fn show_hint(&mut self, hint: &HintView) {
        self.line(&hint.text);
        if let Some(image) = &hint.image {
            let treatment = match image.treatment {
                ImageTreatment::Blurred => "blurred",
                ImageTreatment::HalfHidden => "half hidden",
            };
            self.line(&format!("   [image: {} ({})]", image.file, treatment));
        }
        if let Some(flag) = hint.flag_url.clone() {
            self.line(&format!("   [flag: {}]", flag));
        }
    }

    fn clear_hints(&mut self) {}

    fn update_suggestions(&mut self, names: &[String]) {
        self.suggestions = names.to_vec();
    }

    fn update_attempts(&mut self, attempts_left: u8) {
        self.line(&format!("Attempts left: {}", attempts_left));
    }

    fn update_scoreboard(&mut self, stats: &GameStats) {
        self.line(&format!(
            "Played: {}  Won: {}  ({:.0}%)",
            stats.games_played,
            stats.games_won,
            stats.win_rate()
        ));
    }

    fn notify(&mut self, message: &str) {
        self.line(&format!("! {}", message));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hoop_core::view::BannerKind;

    fn output(p: TerminalPresenter<Vec<u8>>) -> String {
        String::from_utf8(p.into_inner()).unwrap()
    }

    #[test]
    fn renders_scoreboard_and_notices() {
        let mut p = TerminalPresenter::new(Vec::new());
        p.update_scoreboard(&GameStats { games_played: 4, games_won: 1 });
        p.notify("Enter a player name.");
        p.update_attempts(5);
        assert_eq!(
            output(p),
            "Played: 4  Won: 1  (25%)\n! Enter a player name.\nAttempts left: 5\n"
        );
    }

    #[test]
    fn banner_without_player() {
        let mut p = TerminalPresenter::new(Vec::new());
        let banner = Banner::no_players();
        assert_eq!(banner.kind, BannerKind::NoPlayers);
        p.show_banner(&banner);
        let text = output(p);
        assert!(text.contains("No players in this mode. Please change the mode."));
        assert!(text.contains(":restart"));
    }

    #[test]
    fn tracks_input_and_suggestions() {
        let mut p = TerminalPresenter::new(Vec::new());
        assert!(!p.input_enabled());
        p.set_input_enabled(true);
        p.update_suggestions(&["LeBron James".to_string()]);
        assert!(p.input_enabled());
        assert_eq!(p.suggestions(), ["LeBron James".to_string()]);
    }
}
