use crate::Error;
use crate::sim::Command;

#[test]
fn blank_line_advances() {
    assert_eq!("".parse::<Command>().unwrap(), Command::Advance);
    assert_eq!("   ".parse::<Command>().unwrap(), Command::Advance);
}

#[test]
fn commands_parse_case_insensitively() {
    assert_eq!(
        "C A B 9".parse::<Command>().unwrap(),
        Command::ChangeCost {
            a: "A".into(),
            b: "B".into(),
            cost: 9,
        }
    );
    assert_eq!(
        "d A B".parse::<Command>().unwrap(),
        Command::DeleteLink {
            a: "A".into(),
            b: "B".into(),
        }
    );
    assert_eq!(
        " v  A   C ".parse::<Command>().unwrap(),
        Command::ViewRoute {
            from: "A".into(),
            to: "C".into(),
        }
    );
    assert_eq!("Q".parse::<Command>().unwrap(), Command::Quit);
}

#[test]
fn bad_cost_and_bad_arity_are_reported() {
    assert!(matches!(
        "c A B x".parse::<Command>(),
        Err(Error::InvalidCost(s)) if s == "x"
    ));
    assert!(matches!(
        "c A B".parse::<Command>(),
        Err(Error::InvalidCommand(_))
    ));
    assert!(matches!(
        "v A".parse::<Command>(),
        Err(Error::InvalidCommand(_))
    ));
    assert!(matches!(
        "x".parse::<Command>(),
        Err(Error::InvalidCommand(_))
    ));
}
