use crate::{
    CoreError, CoreResult, EntryId, IconRequest, IconSource, MenuEntry, MenuSpec, NotifyOp,
    TrayShell,
};

use std::{
    cell::{Cell, RefCell},
    panic::Location,
    rc::Rc,
};

use error_location::ErrorLocation;

/// A shell call captured by [`RecordingShell`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ShellCall {
    Notify {
        op: NotifyOp,
        icon: IconSource,
        tooltip: String,
    },
    Delete,
    ShowMenu {
        root_entries: usize,
        default_action: Option<EntryId>,
    },
}

/// In-memory shell that records every call.
#[derive(Debug, Default)]
pub(crate) struct RecordingShell {
    pub(crate) calls: Vec<ShellCall>,
    pub(crate) fail_notify: bool,
}

impl RecordingShell {
    pub(crate) fn notify_ops(&self) -> Vec<NotifyOp> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                ShellCall::Notify { op, .. } => Some(*op),
                _ => None,
            })
            .collect()
    }

    pub(crate) fn delete_count(&self) -> usize {
        self.calls
            .iter()
            .filter(|call| matches!(call, ShellCall::Delete))
            .count()
    }
}

impl TrayShell for RecordingShell {
    fn notify_icon(&mut self, op: NotifyOp, request: &IconRequest<'_>) -> CoreResult<()> {
        if self.fail_notify {
            return Err(CoreError::Shell {
                operation: "notify",
                reason: "refused by test shell".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }
        self.calls.push(ShellCall::Notify {
            op,
            icon: request.icon.clone(),
            tooltip: request.tooltip.to_string(),
        });
        Ok(())
    }

    fn delete_icon(&mut self) -> CoreResult<()> {
        self.calls.push(ShellCall::Delete);
        Ok(())
    }

    fn show_menu(&mut self, menu: &[MenuEntry], default_action: Option<EntryId>) -> CoreResult<()> {
        self.calls.push(ShellCall::ShowMenu {
            root_entries: menu.len(),
            default_action,
        });
        Ok(())
    }
}

/// Ordered log shared between a [`SequenceShell`] and user callbacks.
pub(crate) type SharedLog = Rc<RefCell<Vec<&'static str>>>;

/// Shell that writes its calls into a log other parties also append to, so
/// the relative order of shell calls and callbacks can be asserted.
#[derive(Debug, Default)]
pub(crate) struct SequenceShell {
    pub(crate) log: SharedLog,
}

impl TrayShell for SequenceShell {
    fn notify_icon(&mut self, op: NotifyOp, _request: &IconRequest<'_>) -> CoreResult<()> {
        self.log.borrow_mut().push(match op {
            NotifyOp::Add => "Add",
            NotifyOp::Modify => "Modify",
        });
        Ok(())
    }

    fn delete_icon(&mut self) -> CoreResult<()> {
        self.log.borrow_mut().push("Delete");
        Ok(())
    }

    fn show_menu(&mut self, _menu: &[MenuEntry], _default: Option<EntryId>) -> CoreResult<()> {
        self.log.borrow_mut().push("ShowMenu");
        Ok(())
    }
}

/// Shared call counter for callbacks.
pub(crate) fn counter() -> Rc<Cell<u32>> {
    Rc::new(Cell::new(0))
}

/// Menu entry that bumps `count` when selected.
pub(crate) fn counting_entry(label: &str, count: &Rc<Cell<u32>>) -> MenuSpec {
    let count = Rc::clone(count);
    MenuSpec::callback(label, move || {
        count.set(count.get() + 1);
        Ok(())
    })
}

/// `[Hello(fn), Sub[Inner(fn)]]`, the canonical nesting example.
pub(crate) fn hello_sub_inner(hello: &Rc<Cell<u32>>, inner: &Rc<Cell<u32>>) -> Vec<MenuSpec> {
    vec![
        counting_entry("Hello", hello).with_icon("icon1.ico"),
        MenuSpec::submenu("Sub", vec![counting_entry("Inner", inner).with_icon("icon3.ico")])
            .with_icon("icon2.ico"),
    ]
}
