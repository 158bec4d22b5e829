//! Toast notification component

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::ui::Theme;

/// Notification severity level
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationLevel {
    Success,
    Warning,
    Error,
}

/// Toast notification
pub struct Notification {
    /// Message to display
    pub message: String,
    /// Severity level
    pub level: NotificationLevel,
    /// Remaining ticks until dismissal (10 ticks per second)
    pub ttl: u64,
}

impl Notification {
    /// Create a success notification (~3 seconds)
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            level: NotificationLevel::Success,
            ttl: 30,
        }
    }

    /// Create a warning notification (~5 seconds)
    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            level: NotificationLevel::Warning,
            ttl: 50,
        }
    }

    /// Create an error notification (~6 seconds)
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            level: NotificationLevel::Error,
            ttl: 60,
        }
    }

    /// Icon for the severity level
    fn icon(&self) -> &'static str {
        match self.level {
            NotificationLevel::Success => "\u{2713}",
            NotificationLevel::Warning => "\u{26A0}",
            NotificationLevel::Error => "\u{2717}",
        }
    }

    fn style(&self, theme: &Theme) -> Style {
        match self.level {
            NotificationLevel::Success => theme.success(),
            NotificationLevel::Warning => theme.warning(),
            NotificationLevel::Error => theme.danger(),
        }
    }

    /// Render the toast at the top-right of `area`
    fn render(&self, frame: &mut Frame, area: Rect, offset_y: u16, theme: &Theme) {
        let style = self.style(theme);

        let width = (self.message.len() as u16 + 6).min(area.width.saturating_sub(2)).max(12);
        let x = area.x + area.width.saturating_sub(width + 1);
        let y = area.y + 1 + offset_y;
        if y + 3 > area.y + area.height {
            return;
        }
        let toast_area = Rect::new(x, y, width, 3);

        frame.render_widget(Clear, toast_area);

        let block = Block::default().borders(Borders::ALL).border_style(style);
        let content = Paragraph::new(format!("{} {}", self.icon(), self.message))
            .style(style)
            .alignment(Alignment::Center)
            .block(block);

        frame.render_widget(content, toast_area);
    }
}

/// Holds the active toasts and ages them out
pub struct NotificationManager {
    notifications: Vec<Notification>,
    /// Maximum toasts shown at once
    max_visible: usize,
}

impl NotificationManager {
    /// Create a new manager
    pub fn new() -> Self {
        Self {
            notifications: Vec::new(),
            max_visible: 3,
        }
    }

    /// Add a notification, dropping the oldest past the visible limit
    pub fn push(&mut self, notification: Notification) {
        self.notifications.push(notification);
        while self.notifications.len() > self.max_visible {
            self.notifications.remove(0);
        }
    }

    /// Age all notifications and drop the expired ones
    pub fn tick(&mut self) {
        for n in &mut self.notifications {
            n.ttl = n.ttl.saturating_sub(1);
        }
        self.notifications.retain(|n| n.ttl > 0);
    }

    /// Render all active toasts, stacked downward
    pub fn render(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        for (i, notification) in self.notifications.iter().enumerate() {
            notification.render(frame, area, (i * 4) as u16, theme);
        }
    }
}

impl Default for NotificationManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notifications_expire() {
        let mut manager = NotificationManager::new();
        manager.push(Notification::success("done"));
        for _ in 0..30 {
            manager.tick();
        }
        assert!(manager.notifications.is_empty());
    }

    #[test]
    fn test_oldest_notification_is_dropped_over_limit() {
        let mut manager = NotificationManager::new();
        for i in 0..5 {
            manager.push(Notification::warning(format!("toast {i}")));
        }
        assert_eq!(manager.notifications.len(), 3);
        assert_eq!(manager.notifications[0].message, "toast 2");
    }
}
