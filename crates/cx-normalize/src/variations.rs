//! Known first-name variations (nicknames and recurring misspellings).

/// Upper-cased name to the upper-cased variants it is considered equal to.
static NAME_VARIATIONS: &[(&str, &[&str])] = &[
    ("MICHAEL", &["MIKE", "MICHAE", "MICHAELL", "MICHAEAL"]),
    ("MIKE", &["MICHAEL"]),
    ("JAMES", &["JIM", "JIMMY", "JAME"]),
    ("JIM", &["JAMES", "JIMMY"]),
    ("JIMMY", &["JAMES", "JIM"]),
    ("WILLIAM", &["WILL", "BILL", "WILLI", "WILLIAMM"]),
    ("WILL", &["WILLIAM", "BILL"]),
    ("BILL", &["WILLIAM", "WILL"]),
    ("ROBERT", &["BOB", "ROB", "ROBBERT", "ROBERTT"]),
    ("BOB", &["ROBERT", "ROB"]),
    ("ROB", &["ROBERT", "BOB"]),
    ("RICHARD", &["RICH", "DICK", "RICHAR", "RICHARD"]),
    ("RICH", &["RICHARD", "DICK"]),
    ("DICK", &["RICHARD", "RICH"]),
    ("CHRISTOPHER", &["CHRIS", "CHRISS", "CHRISTOPH"]),
    ("CHRIS", &["CHRISTOPHER"]),
    ("JOHN", &["JON", "JOHNNY", "JONNY", "JOHNNE"]),
    ("JON", &["JOHN", "JOHNNY"]),
    ("JOHNNY", &["JOHN", "JON", "JONNY"]),
    ("JONNY", &["JOHN", "JON", "JOHNNY"]),
    ("JOSEPH", &["JOE", "JOESEPH"]),
    ("JOE", &["JOSEPH"]),
    ("DANIEL", &["DAN", "DANNIEL"]),
    ("DAN", &["DANIEL"]),
    ("MATTHEW", &["MATT", "MATTEW", "MATTHE"]),
    ("MATT", &["MATTHEW"]),
    ("ANDREW", &["ANDY", "ANDREW"]),
    ("ANDY", &["ANDREW"]),
    ("DAVID", &["DAVE", "DAIVD"]),
    ("DAVE", &["DAVID"]),
    ("STEPHEN", &["STEVE", "STEVEN", "STEPHENN"]),
    ("STEVE", &["STEPHEN", "STEVEN"]),
    ("STEVEN", &["STEPHEN", "STEVE"]),
    ("ANTHONY", &["TONY", "ANTHONY"]),
    ("TONY", &["ANTHONY"]),
    ("EDWARD", &["ED", "EDDIE", "TED"]),
    ("ED", &["EDWARD", "EDDIE"]),
    ("EDDIE", &["EDWARD", "ED"]),
    ("TED", &["EDWARD", "ED"]),
    ("CHARLES", &["CHARLIE", "CHUCK", "CHARLS"]),
    ("CHARLIE", &["CHARLES", "CHUCK"]),
    ("CHUCK", &["CHARLES", "CHARLIE"]),
    ("THOMAS", &["TOM", "THOMAS"]),
    ("TOM", &["THOMAS"]),
    ("NICHOLAS", &["NICK", "NICHOLAS"]),
    ("NICK", &["NICHOLAS"]),
];

/// True when either upper-cased name lists the other as a variant.
pub(crate) fn is_known_variation(a: &str, b: &str) -> bool {
    variants_of(a).is_some_and(|list| list.contains(&b))
        || variants_of(b).is_some_and(|list| list.contains(&a))
}

fn variants_of(name: &str) -> Option<&'static [&'static str]> {
    NAME_VARIATIONS
        .iter()
        .find(|(key, _)| *key == name)
        .map(|(_, variants)| *variants)
}
