use crate::model::Customer;
use crate::notify::NotificationKind;
use crate::providers::DataSource;
use crate::tui::state::{ListNavigation, ListState};
use crate::tui::traits::{EventResult, PageContext, PageState};
use crossterm::event::{KeyCode, KeyEvent};

#[derive(Debug)]
pub struct ActionsPage {
    pub customers: Vec<Customer>,
    pub list: ListState,
}

impl ActionsPage {
    pub fn mount(data: &dyn DataSource) -> Self {
        let customers = data.customers();
        let list = ListState::with_total(customers.len());
        Self { customers, list }
    }

    pub fn selected(&self) -> Option<&Customer> {
        self.customers.get(self.list.selected)
    }
}

impl PageState for ActionsPage {
    fn handle_key(&mut self, key: KeyEvent, ctx: &mut PageContext<'_>) -> EventResult {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.list.select_prev(),
            KeyCode::Down | KeyCode::Char('j') => self.list.select_next(),
            KeyCode::Char('s') => {
                if let Some(customer) = self.selected() {
                    ctx.notifications.notify(
                        NotificationKind::Success,
                        format!("Action initiated for {}", customer.name),
                        format!("{} message queued for delivery", customer.channel),
                    );
                }
            }
            KeyCode::Char('c') => {
                if let Some(customer) = self.selected() {
                    ctx.notifications.notify(
                        NotificationKind::Success,
                        format!("Action scheduled for {}", customer.name),
                        format!("Will be sent at {}", customer.send_time),
                    );
                }
            }
            _ => return EventResult::Ignored,
        }
        EventResult::Consumed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::NotificationCenter;
    use crate::providers::DemoData;
    use crossterm::event::KeyModifiers;

    fn press(page: &mut ActionsPage, center: &mut NotificationCenter, code: KeyCode) -> EventResult {
        let mut ctx = PageContext {
            notifications: center,
        };
        page.handle_key(KeyEvent::new(code, KeyModifiers::NONE), &mut ctx)
    }

    #[test]
    fn test_send_now_and_schedule() {
        let mut page = ActionsPage::mount(&DemoData::new());
        let mut center = NotificationCenter::default();
        press(&mut page, &mut center, KeyCode::Char('j'));
        let customer = page.selected().cloned().expect("customer");

        press(&mut page, &mut center, KeyCode::Char('s'));
        let sent = center.latest().expect("toast");
        assert_eq!(sent.title, format!("Action initiated for {}", customer.name));
        assert_eq!(
            sent.description,
            format!("{} message queued for delivery", customer.channel)
        );

        press(&mut page, &mut center, KeyCode::Char('c'));
        let scheduled = center.latest().expect("toast");
        assert_eq!(
            scheduled.description,
            format!("Will be sent at {}", customer.send_time)
        );
        assert_eq!(center.total_sent(), 2);
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let mut page = ActionsPage::mount(&DemoData::new());
        let mut center = NotificationCenter::default();
        assert_eq!(
            press(&mut page, &mut center, KeyCode::Char('z')),
            EventResult::Ignored
        );
    }
}
