//! `type_code ↔ Message` dispatch tables.
//!
//! Both directions are realized as ordinary exhaustive `match` expressions.
//! The compiler turns these into jump tables; there is no runtime hash
//! lookup to keep in sync with the `Message` enum by hand.

use embody_core::error::{Result, UnknownMessageType};
use embody_core::Message;

use crate::messages::*;

/// The wire type code for each known message variant.
pub fn type_code(msg: &Message) -> u8 {
    match msg {
        Message::Heartbeat => 0x01,
        Message::HeartbeatResponse => 0x02,
        Message::NackResponse(_) => 0x03,
        Message::SetAttribute(_) => 0x04,
        Message::SetAttributeResponse => 0x05,
        Message::GetAttribute(_) => 0x06,
        Message::GetAttributeResponse(_) => 0x07,
        Message::ResetAttribute(_) => 0x08,
        Message::ConfigureReporting(_) => 0x09,
        Message::ResetReporting => 0x0A,
        Message::PeriodicAttribute(_) => 0x0B,
        Message::ListFiles => 0x0C,
        Message::ListFilesResponse(_) => 0x0D,
        Message::GetFileUart(_) => 0x0E,
        Message::GetFileUartResponse => 0x0F,
        Message::DeleteFile(_) => 0x10,
        Message::DeleteAllFiles => 0x11,
        Message::ReformatDisk => 0x12,
        Message::ExecuteCommand(_) => 0x13,
        Message::ExecuteCommandResponse(_) => 0x14,
        Message::FirmwareUpdate(_) => 0x15,
        Message::AlarmEvent(_) => 0x16,
        Message::RawPulseChanged(_) => 0x17,
        Message::SensorData(_) => 0x18,
        _ => unreachable!("Message has no other variants"),
    }
}

/// Decodes a message body given the type code that preceded it in the frame.
pub fn decode_body(code: u8, body: &[u8]) -> Result<Message> {
    match code {
        0x01 => decode_heartbeat(body),
        0x02 => decode_heartbeat_response(body),
        0x03 => decode_nack_response(body),
        0x04 => decode_set_attribute(body),
        0x05 => decode_set_attribute_response(body),
        0x06 => decode_get_attribute(body),
        0x07 => decode_get_attribute_response(body),
        0x08 => decode_reset_attribute(body),
        0x09 => decode_configure_reporting(body),
        0x0A => decode_reset_reporting(body),
        0x0B => decode_periodic_attribute(body),
        0x0C => decode_list_files(body),
        0x0D => decode_list_files_response(body),
        0x0E => decode_get_file_uart(body),
        0x0F => decode_get_file_uart_response(body),
        0x10 => decode_delete_file(body),
        0x11 => decode_delete_all_files(body),
        0x12 => decode_reformat_disk(body),
        0x13 => decode_execute_command(body),
        0x14 => decode_execute_command_response(body),
        0x15 => decode_firmware_update(body),
        0x16 => decode_alarm_event(body),
        0x17 => decode_raw_pulse_changed(body),
        0x18 => decode_sensor_data(body),
        other => {
            tracing::warn!(code = other, "unknown message type code");
            UnknownMessageType { code: other }.fail()
        }
    }
}

/// Encodes a message's body, without its frame header or CRC.
pub fn encode_body(msg: &Message) -> Result<Vec<u8>> {
    match msg {
        Message::Heartbeat => encode_heartbeat(),
        Message::HeartbeatResponse => encode_heartbeat_response(),
        Message::NackResponse(m) => encode_nack_response(m),
        Message::SetAttribute(m) => encode_set_attribute(m),
        Message::SetAttributeResponse => encode_set_attribute_response(),
        Message::GetAttribute(m) => encode_get_attribute(m),
        Message::GetAttributeResponse(m) => encode_get_attribute_response(m),
        Message::ResetAttribute(m) => encode_reset_attribute(m),
        Message::ConfigureReporting(m) => encode_configure_reporting(m),
        Message::ResetReporting => encode_reset_reporting(),
        Message::PeriodicAttribute(m) => encode_periodic_attribute(m),
        Message::ListFiles => encode_list_files(),
        Message::ListFilesResponse(m) => encode_list_files_response(m),
        Message::GetFileUart(m) => encode_get_file_uart(m),
        Message::GetFileUartResponse => encode_get_file_uart_response(),
        Message::DeleteFile(m) => encode_delete_file(m),
        Message::DeleteAllFiles => encode_delete_all_files(),
        Message::ReformatDisk => encode_reformat_disk(),
        Message::ExecuteCommand(m) => encode_execute_command(m),
        Message::ExecuteCommandResponse(m) => encode_execute_command_response(m),
        Message::FirmwareUpdate(m) => encode_firmware_update(m),
        Message::AlarmEvent(m) => encode_alarm_event(m),
        Message::RawPulseChanged(m) => encode_raw_pulse_changed(m),
        Message::SensorData(m) => encode_sensor_data(m),
        _ => unreachable!("Message has no other variants"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_type_code_is_rejected() {
        let err = decode_body(0xFE, &[]).unwrap_err();
        assert!(matches!(err, embody_core::Error::UnknownMessageType { code: 0xFE }));
    }

    #[test]
    fn every_variant_type_code_round_trips_through_dispatch() {
        let samples = [
            Message::Heartbeat,
            Message::HeartbeatResponse,
            Message::ResetReporting,
            Message::ListFiles,
            Message::GetFileUartResponse,
            Message::DeleteAllFiles,
            Message::ReformatDisk,
        ];
        for msg in samples {
            let code = type_code(&msg);
            let body = encode_body(&msg).unwrap();
            assert_eq!(decode_body(code, &body).unwrap(), msg);
        }
    }
}
