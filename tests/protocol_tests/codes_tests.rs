//! Code Table Tests
//!
//! Tests for the command and status code tables.

use std::collections::HashSet;

use iggy_testgen::protocol::{CommandCode, Status};

#[test]
fn test_command_codes() {
    assert_eq!(CommandCode::Ping.code(), 1);
    assert_eq!(CommandCode::GetStats.code(), 10);
    assert_eq!(CommandCode::LoginUser.code(), 38);
    assert_eq!(CommandCode::LogoutUser.code(), 39);
    assert_eq!(CommandCode::PollMessages.code(), 100);
    assert_eq!(CommandCode::SendMessages.code(), 101);
    assert_eq!(CommandCode::GetConsumerOffset.code(), 120);
    assert_eq!(CommandCode::StoreConsumerOffset.code(), 121);
    assert_eq!(CommandCode::GetStream.code(), 200);
    assert_eq!(CommandCode::GetStreams.code(), 201);
    assert_eq!(CommandCode::CreateStream.code(), 202);
    assert_eq!(CommandCode::DeleteStream.code(), 203);
    assert_eq!(CommandCode::GetTopic.code(), 300);
    assert_eq!(CommandCode::CreateTopic.code(), 302);
    assert_eq!(CommandCode::GetConsumerGroup.code(), 600);
    assert_eq!(CommandCode::CreateConsumerGroup.code(), 602);
}

#[test]
fn test_command_table_is_consistent() {
    let codes: HashSet<u32> = CommandCode::ALL.iter().map(|c| c.code()).collect();
    assert_eq!(codes.len(), CommandCode::ALL.len());

    let labels: HashSet<&str> = CommandCode::ALL.iter().map(|c| c.label()).collect();
    assert_eq!(labels.len(), CommandCode::ALL.len());

    let names: HashSet<&str> = CommandCode::ALL.iter().map(|c| c.name()).collect();
    assert_eq!(names.len(), CommandCode::ALL.len());

    assert!(CommandCode::ALL.windows(2).all(|w| w[0].code() < w[1].code()));
}

#[test]
fn test_command_lookup_agrees() {
    for command in CommandCode::ALL {
        assert_eq!(CommandCode::from_code(command.code()), Some(command));
        assert_eq!(CommandCode::try_from(command.code()).unwrap(), command);
        assert_eq!(command.label().parse::<CommandCode>().unwrap(), command);
        assert_eq!(command.name().parse::<CommandCode>().unwrap(), command);
        assert_eq!(u32::from(command), command.code());
    }
}

#[test]
fn test_command_names() {
    assert_eq!(CommandCode::Ping.name(), "ping");
    assert_eq!(CommandCode::LoginUser.name(), "user.login");
    assert_eq!(CommandCode::CreateTopic.name(), "topic.create");
    assert_eq!(CommandCode::LoginUser.to_string(), "LOGIN_USER");
    assert_eq!("login_user".parse::<CommandCode>().unwrap(), CommandCode::LoginUser);
}

#[test]
fn test_unknown_command() {
    assert_eq!(CommandCode::from_code(2), None);
    assert!(CommandCode::try_from(2).is_err());
    assert!("nope".parse::<CommandCode>().is_err());
}

#[test]
fn test_status_table() {
    assert_eq!(Status::Ok.code(), 0);
    assert_eq!(Status::Disconnected.code(), 8);
    assert_eq!(Status::from_code(42), Some(Status::InvalidCredentials));
    assert_eq!(Status::from_code(3).map(Status::name), Some("Invalid Command"));
    assert_eq!(Status::from_code(7), None);
    assert_eq!(Status::from_code(100), None);

    let codes: HashSet<u32> = Status::ALL.iter().map(|s| s.code()).collect();
    assert_eq!(codes.len(), Status::ALL.len());
    for status in Status::ALL {
        assert_eq!(Status::from_code(status.code()), Some(status));
    }
}
