pub mod test_helpers {
    use crate::event_source::{Event, SimulatedEventSource};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    /// Builder for creating test scenarios with simulated user input
    pub struct TestScenarioBuilder {
        events: Vec<Event>,
    }

    impl Default for TestScenarioBuilder {
        fn default() -> Self {
            Self::new()
        }
    }

    impl TestScenarioBuilder {
        pub fn new() -> Self {
            Self { events: Vec::new() }
        }

        /// Add a character key press
        pub fn press_char(mut self, c: char) -> Self {
            self.events.push(SimulatedEventSource::char_key(c));
            self
        }

        /// Press the left mouse button at a terminal cell
        pub fn mouse_down(mut self, column: u16, row: u16) -> Self {
            self.events.push(SimulatedEventSource::left_down(column, row));
            self
        }

        /// Move the mouse with the left button held
        pub fn mouse_drag(mut self, column: u16, row: u16) -> Self {
            self.events.push(SimulatedEventSource::left_drag(column, row));
            self
        }

        /// Release the left mouse button
        pub fn mouse_up(mut self, column: u16, row: u16) -> Self {
            self.events.push(SimulatedEventSource::left_up(column, row));
            self
        }

        /// Full press-drag-release gesture between two cells
        pub fn drag_select(self, from: (u16, u16), to: (u16, u16)) -> Self {
            self.mouse_down(from.0, from.1)
                .mouse_drag(to.0, to.1)
                .mouse_up(to.0, to.1)
        }

        /// Quit the application (press 'q')
        pub fn quit(mut self) -> Self {
            self.events.push(SimulatedEventSource::char_key('q'));
            self
        }

        /// Build the simulated event source
        pub fn build(self) -> SimulatedEventSource {
            SimulatedEventSource::new(self.events)
        }
    }

    /// Create a test terminal for snapshot testing
    pub fn create_test_terminal(width: u16, height: u16) -> Terminal<TestBackend> {
        let backend = TestBackend::new(width, height);
        Terminal::new(backend).unwrap()
    }

    /// Capture the current terminal buffer as a string
    pub fn capture_terminal_state(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        let mut lines = Vec::new();

        for y in 0..buffer.area.height {
            let mut line = String::new();
            for x in 0..buffer.area.width {
                line.push_str(buffer[(x, y)].symbol());
            }
            // Trim trailing whitespace from each line
            lines.push(line.trim_end().to_string());
        }

        // Remove trailing empty lines
        while lines.last().map(|l| l.is_empty()).unwrap_or(false) {
            lines.pop();
        }

        lines.join("\n")
    }
}
