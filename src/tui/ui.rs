use ratatui::Frame;
use ratatui::widgets::Paragraph;

use crate::tui::shell::Shell;

/// Put the shell's current frame on screen.
///
/// All layout already happened in `Shell::render`; rows past the bottom of
/// a too-small terminal are clipped by the paragraph.
pub fn draw(frame: &mut Frame, shell: &Shell) {
    frame.render_widget(Paragraph::new(shell.render()), frame.area());
}
