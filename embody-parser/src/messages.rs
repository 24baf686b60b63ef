//! One decode/encode function pair per message variant.
//!
//! Every function is a straight-line read or write over a [`Cursor`]/
//! `Vec<u8>`: the layout of each body is fixed by the protocol, so there is
//! no benefit to discovering field widths by reflection the way a
//! dynamically-typed source implementation might.

use embody_core::cursor::Cursor;
use embody_core::enums::FirmwareUpdateState;
use embody_core::error::{Result, TrailingGarbage};
use embody_core::file_entry::FileEntry;
use embody_core::message::{
    AlarmEvent, ConfigureReporting, DeleteFile, ExecuteCommand, ExecuteCommandResponse,
    FirmwareUpdate, GetAttribute, GetAttributeResponse, GetFileUart, ListFilesResponse,
    NackResponse, PeriodicAttribute, RawPulseChanged, ResetAttribute, SensorData, SetAttribute,
};
use embody_core::Message;
use embody_encoding::{decode_accel, decode_enum, encode_accel, encode_enum};

use crate::fixed_name::{read_fixed_name, write_fixed_name};

fn ensure_empty(body: &[u8]) -> Result<()> {
    if body.is_empty() {
        Ok(())
    } else {
        TrailingGarbage { extra: body.len() }.fail()
    }
}

fn ensure_consumed(cur: &Cursor<'_>) -> Result<()> {
    if cur.remaining() == 0 {
        Ok(())
    } else {
        TrailingGarbage {
            extra: cur.remaining(),
        }
        .fail()
    }
}

// --- Heartbeat / HeartbeatResponse ---

pub fn decode_heartbeat(body: &[u8]) -> Result<Message> {
    ensure_empty(body)?;
    Ok(Message::Heartbeat)
}

pub fn encode_heartbeat() -> Result<Vec<u8>> {
    Ok(Vec::new())
}

pub fn decode_heartbeat_response(body: &[u8]) -> Result<Message> {
    ensure_empty(body)?;
    Ok(Message::HeartbeatResponse)
}

pub fn encode_heartbeat_response() -> Result<Vec<u8>> {
    Ok(Vec::new())
}

// --- NackResponse ---

pub fn decode_nack_response(body: &[u8]) -> Result<Message> {
    let mut cur = Cursor::new(body);
    let error_code = cur.read_u8()?;
    ensure_consumed(&cur)?;
    Ok(Message::NackResponse(NackResponse { error_code }))
}

pub fn encode_nack_response(m: &NackResponse) -> Result<Vec<u8>> {
    Ok(vec![m.error_code])
}

// --- SetAttribute ---

pub fn decode_set_attribute(body: &[u8]) -> Result<Message> {
    let mut cur = Cursor::new(body);
    let id = cur.read_u8()?;
    let rest = cur.read_rest();
    let (value, consumed) = embody_dictionary::decode_attribute(id, rest)?;
    if consumed != rest.len() {
        return TrailingGarbage {
            extra: rest.len() - consumed,
        }
        .fail();
    }
    Ok(Message::SetAttribute(SetAttribute { id, value }))
}

pub fn encode_set_attribute(m: &SetAttribute) -> Result<Vec<u8>> {
    let mut out = vec![m.id];
    out.extend(embody_dictionary::encode_attribute(m.id, &m.value)?);
    Ok(out)
}

// --- SetAttributeResponse ---

pub fn decode_set_attribute_response(body: &[u8]) -> Result<Message> {
    ensure_empty(body)?;
    Ok(Message::SetAttributeResponse)
}

pub fn encode_set_attribute_response() -> Result<Vec<u8>> {
    Ok(Vec::new())
}

// --- GetAttribute ---

pub fn decode_get_attribute(body: &[u8]) -> Result<Message> {
    let mut cur = Cursor::new(body);
    let id = cur.read_u8()?;
    ensure_consumed(&cur)?;
    Ok(Message::GetAttribute(GetAttribute { id }))
}

pub fn encode_get_attribute(m: &GetAttribute) -> Result<Vec<u8>> {
    Ok(vec![m.id])
}

// --- GetAttributeResponse ---

pub fn decode_get_attribute_response(body: &[u8]) -> Result<Message> {
    let mut cur = Cursor::new(body);
    let id = cur.read_u8()?;
    let changed_at = cur.read_u48()?;
    let reporting_on = cur.read_u8()? != 0;
    let reporting_interval_ms = cur.read_u16()?;
    let rest = cur.read_rest();
    let (value, consumed) = embody_dictionary::decode_attribute(id, rest)?;
    if consumed != rest.len() {
        return TrailingGarbage {
            extra: rest.len() - consumed,
        }
        .fail();
    }
    Ok(Message::GetAttributeResponse(GetAttributeResponse {
        id,
        changed_at,
        reporting_on,
        reporting_interval_ms,
        value,
    }))
}

pub fn encode_get_attribute_response(m: &GetAttributeResponse) -> Result<Vec<u8>> {
    let mut out = vec![m.id];
    let mut ts = embody_core::cursor::CursorMut::default();
    ts.write_u48(m.changed_at)?;
    out.extend(ts.into_bytes());
    out.push(m.reporting_on as u8);
    out.extend_from_slice(&m.reporting_interval_ms.to_be_bytes());
    out.extend(embody_dictionary::encode_attribute(m.id, &m.value)?);
    Ok(out)
}

// --- ResetAttribute ---

pub fn decode_reset_attribute(body: &[u8]) -> Result<Message> {
    let mut cur = Cursor::new(body);
    let id = cur.read_u8()?;
    ensure_consumed(&cur)?;
    Ok(Message::ResetAttribute(ResetAttribute { id }))
}

pub fn encode_reset_attribute(m: &ResetAttribute) -> Result<Vec<u8>> {
    Ok(vec![m.id])
}

// --- ConfigureReporting ---

pub fn decode_configure_reporting(body: &[u8]) -> Result<Message> {
    let mut cur = Cursor::new(body);
    let id = cur.read_u8()?;
    let interval_ms = cur.read_u16()?;
    let on_change = cur.read_u8()? != 0;
    ensure_consumed(&cur)?;
    Ok(Message::ConfigureReporting(ConfigureReporting {
        id,
        interval_ms,
        on_change,
    }))
}

pub fn encode_configure_reporting(m: &ConfigureReporting) -> Result<Vec<u8>> {
    let mut out = vec![m.id];
    out.extend_from_slice(&m.interval_ms.to_be_bytes());
    out.push(m.on_change as u8);
    Ok(out)
}

// --- ResetReporting ---

pub fn decode_reset_reporting(body: &[u8]) -> Result<Message> {
    ensure_empty(body)?;
    Ok(Message::ResetReporting)
}

pub fn encode_reset_reporting() -> Result<Vec<u8>> {
    Ok(Vec::new())
}

// --- PeriodicAttribute ---

pub fn decode_periodic_attribute(body: &[u8]) -> Result<Message> {
    let mut cur = Cursor::new(body);
    let id = cur.read_u8()?;
    let rest = cur.read_rest();
    let (value, consumed) = embody_dictionary::decode_attribute(id, rest)?;
    if consumed != rest.len() {
        return TrailingGarbage {
            extra: rest.len() - consumed,
        }
        .fail();
    }
    Ok(Message::PeriodicAttribute(PeriodicAttribute { id, value }))
}

pub fn encode_periodic_attribute(m: &PeriodicAttribute) -> Result<Vec<u8>> {
    let mut out = vec![m.id];
    out.extend(embody_dictionary::encode_attribute(m.id, &m.value)?);
    Ok(out)
}

// --- ListFiles / ListFilesResponse ---

pub fn decode_list_files(body: &[u8]) -> Result<Message> {
    ensure_empty(body)?;
    Ok(Message::ListFiles)
}

pub fn encode_list_files() -> Result<Vec<u8>> {
    Ok(Vec::new())
}

pub fn decode_list_files_response(body: &[u8]) -> Result<Message> {
    let mut cur = Cursor::new(body);
    let count = cur.read_u8()?;
    let mut entries = embody_core::message::FileEntries::with_capacity(count as usize);
    for _ in 0..count {
        let name_bytes = cur.read_bytes(embody_core::FILE_NAME_WIDTH)?;
        let name = read_fixed_name(name_bytes)?;
        let size = cur.read_u32()?;
        entries.push(FileEntry::new(name, size)?);
    }
    ensure_consumed(&cur)?;
    Ok(Message::ListFilesResponse(ListFilesResponse { entries }))
}

pub fn encode_list_files_response(m: &ListFilesResponse) -> Result<Vec<u8>> {
    if m.entries.len() > u8::MAX as usize {
        return embody_core::error::RangeError {
            reason: format!("{} file entries exceed the u8 count field", m.entries.len()),
        }
        .fail();
    }
    let mut out = vec![m.entries.len() as u8];
    for entry in &m.entries {
        write_fixed_name(&entry.name, &mut out)?;
        out.extend_from_slice(&entry.size.to_be_bytes());
    }
    Ok(out)
}

// --- GetFileUart / GetFileUartResponse ---

pub fn decode_get_file_uart(body: &[u8]) -> Result<Message> {
    let mut cur = Cursor::new(body);
    let name_bytes = cur.read_bytes(embody_core::FILE_NAME_WIDTH)?;
    let name = read_fixed_name(name_bytes)?;
    ensure_consumed(&cur)?;
    Ok(Message::GetFileUart(GetFileUart { name }))
}

pub fn encode_get_file_uart(m: &GetFileUart) -> Result<Vec<u8>> {
    let mut out = Vec::new();
    write_fixed_name(&m.name, &mut out)?;
    Ok(out)
}

pub fn decode_get_file_uart_response(body: &[u8]) -> Result<Message> {
    ensure_empty(body)?;
    Ok(Message::GetFileUartResponse)
}

pub fn encode_get_file_uart_response() -> Result<Vec<u8>> {
    Ok(Vec::new())
}

// --- DeleteFile / DeleteAllFiles / ReformatDisk ---

pub fn decode_delete_file(body: &[u8]) -> Result<Message> {
    let mut cur = Cursor::new(body);
    let name_bytes = cur.read_bytes(embody_core::FILE_NAME_WIDTH)?;
    let name = read_fixed_name(name_bytes)?;
    ensure_consumed(&cur)?;
    Ok(Message::DeleteFile(DeleteFile { name }))
}

pub fn encode_delete_file(m: &DeleteFile) -> Result<Vec<u8>> {
    let mut out = Vec::new();
    write_fixed_name(&m.name, &mut out)?;
    Ok(out)
}

pub fn decode_delete_all_files(body: &[u8]) -> Result<Message> {
    ensure_empty(body)?;
    Ok(Message::DeleteAllFiles)
}

pub fn encode_delete_all_files() -> Result<Vec<u8>> {
    Ok(Vec::new())
}

pub fn decode_reformat_disk(body: &[u8]) -> Result<Message> {
    ensure_empty(body)?;
    Ok(Message::ReformatDisk)
}

pub fn encode_reformat_disk() -> Result<Vec<u8>> {
    Ok(Vec::new())
}

// --- ExecuteCommand / ExecuteCommandResponse ---

pub fn decode_execute_command(body: &[u8]) -> Result<Message> {
    let mut cur = Cursor::new(body);
    let cmd = cur.read_u8()?;
    let payload = cur.read_rest().to_vec();
    Ok(Message::ExecuteCommand(ExecuteCommand { cmd, payload }))
}

pub fn encode_execute_command(m: &ExecuteCommand) -> Result<Vec<u8>> {
    let mut out = vec![m.cmd];
    out.extend_from_slice(&m.payload);
    Ok(out)
}

pub fn decode_execute_command_response(body: &[u8]) -> Result<Message> {
    let mut cur = Cursor::new(body);
    let status = cur.read_u8()?;
    let payload = cur.read_rest().to_vec();
    Ok(Message::ExecuteCommandResponse(ExecuteCommandResponse {
        status,
        payload,
    }))
}

pub fn encode_execute_command_response(m: &ExecuteCommandResponse) -> Result<Vec<u8>> {
    let mut out = vec![m.status];
    out.extend_from_slice(&m.payload);
    Ok(out)
}

// --- FirmwareUpdate ---

pub fn decode_firmware_update(body: &[u8]) -> Result<Message> {
    let mut cur = Cursor::new(body);
    let state: FirmwareUpdateState = decode_enum(&mut cur)?;
    let progress = cur.read_u8()?;
    ensure_consumed(&cur)?;
    Ok(Message::FirmwareUpdate(FirmwareUpdate { state, progress }))
}

pub fn encode_firmware_update(m: &FirmwareUpdate) -> Result<Vec<u8>> {
    let mut cur = embody_core::cursor::CursorMut::default();
    encode_enum(&mut cur, m.state);
    cur.write_u8(m.progress);
    Ok(cur.into_bytes())
}

// --- AlarmEvent ---

pub fn decode_alarm_event(body: &[u8]) -> Result<Message> {
    let mut cur = Cursor::new(body);
    let code = cur.read_u8()?;
    let timestamp = cur.read_u48()?;
    ensure_consumed(&cur)?;
    Ok(Message::AlarmEvent(AlarmEvent { code, timestamp }))
}

pub fn encode_alarm_event(m: &AlarmEvent) -> Result<Vec<u8>> {
    let mut cur = embody_core::cursor::CursorMut::default();
    cur.write_u8(m.code);
    cur.write_u48(m.timestamp)?;
    Ok(cur.into_bytes())
}

// --- RawPulseChanged ---

pub fn decode_raw_pulse_changed(body: &[u8]) -> Result<Message> {
    let mut cur = Cursor::new(body);
    let value = cur.read_i32()?;
    ensure_consumed(&cur)?;
    Ok(Message::RawPulseChanged(RawPulseChanged { value }))
}

pub fn encode_raw_pulse_changed(m: &RawPulseChanged) -> Result<Vec<u8>> {
    let mut cur = embody_core::cursor::CursorMut::default();
    cur.write_i32(m.value);
    Ok(cur.into_bytes())
}

// --- SensorData ---

pub fn decode_sensor_data(body: &[u8]) -> Result<Message> {
    let mut cur = Cursor::new(body);
    let timestamp = cur.read_u48()?;
    let accel = decode_accel(&mut cur)?;
    ensure_consumed(&cur)?;
    Ok(Message::SensorData(SensorData { timestamp, accel }))
}

pub fn encode_sensor_data(m: &SensorData) -> Result<Vec<u8>> {
    let mut cur = embody_core::cursor::CursorMut::default();
    cur.write_u48(m.timestamp)?;
    encode_accel(&mut cur, &m.accel);
    Ok(cur.into_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;
    use embody_core::attribute::AttributeValue;

    #[test]
    fn heartbeat_body_must_be_empty() {
        assert!(decode_heartbeat(&[]).is_ok());
        assert!(decode_heartbeat(&[0]).is_err());
    }

    #[test]
    fn get_attribute_response_battery_level_scenario() {
        let body = [0xA1, 0, 0, 0, 0, 0, 0x7B, 0x01, 0x00, 0x3C, 0x55];
        let msg = decode_get_attribute_response(&body).unwrap();
        match &msg {
            Message::GetAttributeResponse(r) => {
                assert_eq!(r.id, 0xA1);
                assert_eq!(r.changed_at, 123);
                assert!(r.reporting_on);
                assert_eq!(r.reporting_interval_ms, 60);
                match r.value {
                    AttributeValue::Scaled(s) => assert_eq!(s.raw, 0x55),
                    other => panic!("unexpected value {other:?}"),
                }
            }
            other => panic!("unexpected message {other:?}"),
        }
    }

    #[test]
    fn list_files_response_two_entries_round_trips() {
        let m = ListFilesResponse {
            entries: vec![
                FileEntry::new("log.bin", 100).unwrap(),
                FileEntry::new("cfg.bin", 42).unwrap(),
            ]
            .into(),
        };
        let encoded = encode_list_files_response(&m).unwrap();
        assert_eq!(encoded.len(), 1 + 2 * (embody_core::FILE_NAME_WIDTH + 4));
        let msg = decode_list_files_response(&encoded).unwrap();
        match msg {
            Message::ListFilesResponse(r) => assert_eq!(r, m),
            other => panic!("unexpected message {other:?}"),
        }
    }

    #[test]
    fn execute_command_carries_an_opaque_payload() {
        let m = ExecuteCommand {
            cmd: 7,
            payload: vec![1, 2, 3],
        };
        let encoded = encode_execute_command(&m).unwrap();
        let msg = decode_execute_command(&encoded).unwrap();
        match msg {
            Message::ExecuteCommand(r) => assert_eq!(r, m),
            other => panic!("unexpected message {other:?}"),
        }
    }
}
