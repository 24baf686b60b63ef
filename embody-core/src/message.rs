//! The tagged union of every message the protocol can carry, one variant per
//! known type code.
//!
//! This module only defines the data; reading and writing bytes is the job
//! of the message body codecs in `embody-parser`, consistent with keeping
//! field layout a compile-time affair rather than something discovered by
//! reflection.

use smallvec::SmallVec;

use crate::attribute::AttributeValue;
use crate::enums::FirmwareUpdateState;
use crate::file_entry::FileEntry;

/// File-listing entries: inline storage for the common case of a handful of
/// files, spilling to the heap only for larger device file systems.
pub type FileEntries = SmallVec<[FileEntry; 4]>;

/// `NackResponse` — a negative acknowledgement carrying a device-defined error code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NackResponse {
    /// The device-defined error code.
    pub error_code: u8,
}

/// `SetAttribute` — asks the device to set an attribute to a new value.
#[derive(Debug, Clone, PartialEq)]
pub struct SetAttribute {
    /// The attribute id.
    pub id: u8,
    /// The value to set, whose shape is determined by `id`.
    pub value: AttributeValue,
}

/// `GetAttribute` — asks the device to report an attribute's current value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GetAttribute {
    /// The attribute id.
    pub id: u8,
}

/// `GetAttributeResponse` — the device's answer to [`GetAttribute`], also used
/// as the body of unsolicited attribute reports.
#[derive(Debug, Clone, PartialEq)]
pub struct GetAttributeResponse {
    /// The attribute id.
    pub id: u8,
    /// Milliseconds since the Unix epoch at which the value last changed.
    pub changed_at: u64,
    /// Whether device-driven reporting is currently enabled for this attribute.
    pub reporting_on: bool,
    /// The configured periodic reporting interval, in milliseconds.
    pub reporting_interval_ms: u16,
    /// The current value.
    pub value: AttributeValue,
}

/// `ResetAttribute` — asks the device to reset an attribute to its default value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResetAttribute {
    /// The attribute id.
    pub id: u8,
}

/// `ConfigureReporting` — arms or reconfigures device-driven reporting for an attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfigureReporting {
    /// The attribute id.
    pub id: u8,
    /// The periodic reporting interval, in milliseconds (0 disables periodic reports).
    pub interval_ms: u16,
    /// Whether a report should also be sent whenever the value changes.
    pub on_change: bool,
}

/// `PeriodicAttribute` — an unsolicited, device-driven attribute report.
#[derive(Debug, Clone, PartialEq)]
pub struct PeriodicAttribute {
    /// The attribute id.
    pub id: u8,
    /// The reported value.
    pub value: AttributeValue,
}

/// `ListFilesResponse` — the device's file listing.
#[derive(Debug, Clone, PartialEq)]
pub struct ListFilesResponse {
    /// One entry per file on the device.
    pub entries: FileEntries,
}

/// `GetFileUart` — asks the device to begin streaming a file's contents over
/// its UART side channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetFileUart {
    /// The file's name.
    pub name: String,
}

/// `DeleteFile` — asks the device to delete a named file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteFile {
    /// The file's name.
    pub name: String,
}

/// `ExecuteCommand` — invokes a device-defined command with an opaque payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecuteCommand {
    /// The device-defined command id.
    pub cmd: u8,
    /// The command's opaque argument bytes.
    pub payload: Vec<u8>,
}

/// `ExecuteCommandResponse` — the device's answer to [`ExecuteCommand`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecuteCommandResponse {
    /// A device-defined status code (0 conventionally means success).
    pub status: u8,
    /// The command's opaque result bytes.
    pub payload: Vec<u8>,
}

/// `FirmwareUpdate` — reports the progress of an in-flight firmware update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FirmwareUpdate {
    /// The update's current state.
    pub state: FirmwareUpdateState,
    /// Completion percentage, 0-100.
    pub progress: u8,
}

/// `AlarmEvent` — a device-raised alarm, identified by a device-defined code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlarmEvent {
    /// The device-defined alarm code.
    pub code: u8,
    /// Milliseconds since the Unix epoch at which the alarm was raised.
    pub timestamp: u64,
}

/// `RawPulseChanged` — a raw, unfiltered pulse sensor sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawPulseChanged {
    /// The raw sensor reading.
    pub value: i32,
}

/// `SensorData` — a timestamped accelerometer sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SensorData {
    /// Milliseconds since the Unix epoch at which the sample was taken.
    pub timestamp: u64,
    /// The accelerometer reading.
    pub accel: crate::attribute::AccelSample,
}

/// A decoded or to-be-encoded protocol message: one variant per known type code.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum Message {
    /// Empty-body keep-alive sent by the host.
    Heartbeat,
    /// Empty-body keep-alive reply sent by the device.
    HeartbeatResponse,
    /// Negative acknowledgement of the previous request.
    NackResponse(NackResponse),
    /// Request to set an attribute's value.
    SetAttribute(SetAttribute),
    /// Empty-body acknowledgement of [`SetAttribute`].
    SetAttributeResponse,
    /// Request to read an attribute's current value.
    GetAttribute(GetAttribute),
    /// Answer to [`GetAttribute`], or an unsolicited attribute report.
    GetAttributeResponse(GetAttributeResponse),
    /// Request to reset an attribute to its default value.
    ResetAttribute(ResetAttribute),
    /// Request to arm or reconfigure device-driven reporting.
    ConfigureReporting(ConfigureReporting),
    /// Empty-body request to disarm all device-driven reporting.
    ResetReporting,
    /// Unsolicited, device-driven attribute report.
    PeriodicAttribute(PeriodicAttribute),
    /// Empty-body request for the device's file listing.
    ListFiles,
    /// Answer to [`ListFiles`].
    ListFilesResponse(ListFilesResponse),
    /// Request to begin streaming a file over the UART side channel.
    GetFileUart(GetFileUart),
    /// Empty-body acknowledgement that UART file streaming has begun.
    GetFileUartResponse,
    /// Request to delete a named file.
    DeleteFile(DeleteFile),
    /// Empty-body request to delete every file on the device.
    DeleteAllFiles,
    /// Empty-body request to reformat the device's storage.
    ReformatDisk,
    /// Invocation of a device-defined command.
    ExecuteCommand(ExecuteCommand),
    /// Answer to [`ExecuteCommand`].
    ExecuteCommandResponse(ExecuteCommandResponse),
    /// Firmware update progress report.
    FirmwareUpdate(FirmwareUpdate),
    /// Device-raised alarm notification.
    AlarmEvent(AlarmEvent),
    /// Raw, unfiltered pulse sensor sample.
    RawPulseChanged(RawPulseChanged),
    /// Timestamped accelerometer sample.
    SensorData(SensorData),
}
