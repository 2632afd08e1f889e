use crate::entities::TaskStatus::{Downloading, Seeding};
use crate::entities::{Task, Transfer};
use byte_unit::{Byte, UnitType};

impl Task {
    fn transfer(&self) -> Option<&Transfer> {
        self.additional
            .as_ref()
            .and_then(|additional| additional.transfer.as_ref())
    }

    /// Human-readable task size
    #[must_use]
    pub fn display_size(&self) -> String {
        let size = Byte::from(self.size);
        format!("{:#.2}", size.get_appropriate_unit(UnitType::Decimal))
    }

    /// Download progress as a rounded percentage
    #[allow(clippy::cast_precision_loss)]
    #[must_use]
    pub fn progress(&self) -> f64 {
        self.transfer()
            .map(|transfer| (transfer.size_downloaded as f64 / self.size as f64 * 100.0).round())
            .take_if(|progress| !progress.is_nan())
            .unwrap_or_default()
    }

    /// Human-readable current transfer speed
    ///
    /// Download speed while downloading, upload speed while seeding, empty
    /// otherwise.
    #[must_use]
    pub fn display_speed(&self) -> String {
        match self.status {
            Downloading => self.transfer().map(|transfer| transfer.speed_download),
            Seeding => self.transfer().map(|transfer| transfer.speed_upload),
            _ => None,
        }
        .take_if(|speed| *speed > 0)
        .map(|speed| {
            format!(
                "{:#.2}/s",
                Byte::from(speed).get_appropriate_unit(UnitType::Decimal)
            )
        })
        .unwrap_or_default()
    }

    /// Estimated seconds until the download finishes
    ///
    /// `None` when the task is not downloading or carries no transfer stats,
    /// -1 when stalled.
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
    #[must_use]
    pub fn eta_seconds(&self) -> Option<i64> {
        if !matches!(self.status, Downloading) {
            return None;
        }

        let transfer = self.transfer()?;
        if transfer.speed_download == 0 {
            return Some(-1);
        }

        let remaining = self.size.saturating_sub(transfer.size_downloaded);
        Some((remaining as f64 / transfer.speed_download as f64).floor() as i64)
    }
}

/// Formats a second count as a compact duration, "Unknown" for negatives
#[must_use]
pub fn format_duration(input: i64) -> String {
    if input < 0 {
        return String::from("Unknown");
    }

    let days = input / 86400;
    let hours = (input % 86400) / 3600;
    let minutes = (input % 3600) / 60;
    let seconds = input % 60;

    match (days, hours, minutes) {
        (0, 0, 0) => format!("{seconds} s"),
        (0, 0, _) => format!("{minutes} m {seconds} s"),
        (0, _, _) => format!("{hours} h {minutes} m"),
        _ => format!("{days} d {hours} h {minutes} m"),
    }
}

#[cfg(test)]
mod tests {
    // Note this useful idiom: importing names from outer (for mod tests) scope.
    use super::*;
    use crate::entities::AdditionalTaskInfo;

    fn downloading_task() -> Task {
        Task {
            id: String::from("dbid_123"),
            username: String::from("bob"),
            task_type: String::from("bt"),
            title: String::from("Ubuntu 24.04"),
            size: 1_234_567_890,
            status: Downloading,
            status_extra: None,
            additional: Some(AdditionalTaskInfo {
                transfer: Some(Transfer {
                    size_downloaded: 617_283_945,
                    speed_download: 98765,
                    ..Default::default()
                }),
                ..Default::default()
            }),
        }
    }

    #[test]
    fn test_display_size() {
        let task = downloading_task();
        assert_eq!("1.23 GB", task.display_size());
    }

    #[test]
    fn test_progress() {
        let mut task = downloading_task();
        assert_eq!(50.0, task.progress());
        // No transfer stats reported yet
        task.additional = None;
        assert_eq!(0.0, task.progress());
    }

    #[test]
    fn test_display_speed() {
        let mut task = downloading_task();
        assert_eq!("98.77 KB/s", task.display_speed());
        // Seeding reports the upload speed
        task.status = Seeding;
        let transfer = task
            .additional
            .as_mut()
            .unwrap()
            .transfer
            .as_mut()
            .unwrap();
        transfer.speed_download = 0;
        transfer.speed_upload = 45678;
        assert_eq!("45.68 KB/s", task.display_speed());
        // A stalled transfer shows no speed at all
        task.additional
            .as_mut()
            .unwrap()
            .transfer
            .as_mut()
            .unwrap()
            .speed_upload = 0;
        assert_eq!("", task.display_speed());
    }

    #[test]
    fn test_eta_seconds() {
        let mut task = downloading_task();
        assert_eq!(Some(6250), task.eta_seconds());
        task.additional
            .as_mut()
            .unwrap()
            .transfer
            .as_mut()
            .unwrap()
            .speed_download = 0;
        assert_eq!(Some(-1), task.eta_seconds());
        task.status = Seeding;
        assert_eq!(None, task.eta_seconds());
    }

    #[test]
    fn test_format_duration() {
        assert_eq!("Unknown", format_duration(-1));
        assert_eq!("59 s", format_duration(59));
        assert_eq!("59 m 59 s", format_duration(3599));
        assert_eq!("3 h 28 m", format_duration(12500));
        assert_eq!("2 d 5 h 7 m", format_duration(2 * 86400 + 5 * 3600 + 7 * 60));
    }
}
