use sm130::protocol::codec::encode_command_frame;
use sm130::protocol::commands::Command;
use sm130::types::{AuthMode, BaudRate, Key};

#[test]
fn system_command_frames() {
    let cases: Vec<(Command, Vec<u8>)> = vec![
        (Command::Reset, vec![0x01, 0x80, 0x81]),
        (Command::GetFirmware, vec![0x01, 0x81, 0x82]),
        (Command::SeekTag, vec![0x01, 0x82, 0x83]),
        (Command::SelectTag, vec![0x01, 0x83, 0x84]),
        (Command::Sleep, vec![0x01, 0x96, 0x97]),
        (
            Command::SetAntennaPower { level: 0 },
            vec![0x02, 0x90, 0x00, 0x92],
        ),
        (
            Command::SetBaudRate {
                rate: BaudRate::B19200,
            },
            vec![0x02, 0x94, 0x01, 0x97],
        ),
    ];
    for (cmd, expected) in cases {
        assert_eq!(encode_command_frame(&cmd).unwrap(), expected, "{:?}", cmd);
    }
}

#[test]
fn authenticate_frame_carries_mode_and_key() {
    let cmd = Command::Authenticate {
        block: 4,
        mode: AuthMode::KEY_A,
        key: Key::from_bytes([0xFF; 6]),
    };
    let frame = encode_command_frame(&cmd).unwrap();
    assert_eq!(frame.len(), 11);
    assert_eq!(&frame[..4], &[0x09, 0x85, 0x04, 0xAA]);
    assert_eq!(&frame[4..10], &[0xFF; 6]);
}

#[test]
fn transport_mode_default_key() {
    let cmd = Command::Authenticate {
        block: 4,
        mode: AuthMode::default(),
        key: Key::default(),
    };
    let frame = encode_command_frame(&cmd).unwrap();
    assert_eq!(frame[3], 0xFF);
    assert_eq!(*frame.last().unwrap(), 0x91);
}
