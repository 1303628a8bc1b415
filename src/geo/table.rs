use super::Continent::{self, *};

/// ISO 3166-1 alpha-2 code, short name, continent.
pub(super) type Entry = (&'static str, &'static str, Option<Continent>);

/// Sorted by code for binary search.
///
/// Codes flag emoji can carry outside ISO 3166-1 (`XK`, `IC`, `CP`, `EU`,
/// `EA`) are listed so pack names can be built for them; their continent is
/// settled by the overrides in `super::continent`.
pub(super) static COUNTRIES: &[Entry] = &[
    ("AD", "Andorra", Some(Europe)),
    ("AE", "United Arab Emirates", Some(Asia)),
    ("AF", "Afghanistan", Some(Asia)),
    ("AG", "Antigua and Barbuda", Some(NorthAmerica)),
    ("AI", "Anguilla", Some(NorthAmerica)),
    ("AL", "Albania", Some(Europe)),
    ("AM", "Armenia", Some(Asia)),
    ("AO", "Angola", Some(Africa)),
    ("AQ", "Antarctica", Some(Antarctica)),
    ("AR", "Argentina", Some(SouthAmerica)),
    ("AS", "American Samoa", Some(Oceania)),
    ("AT", "Austria", Some(Europe)),
    ("AU", "Australia", Some(Oceania)),
    ("AW", "Aruba", Some(NorthAmerica)),
    ("AX", "Åland Islands", Some(Europe)),
    ("AZ", "Azerbaijan", Some(Asia)),
    ("BA", "Bosnia and Herzegovina", Some(Europe)),
    ("BB", "Barbados", Some(NorthAmerica)),
    ("BD", "Bangladesh", Some(Asia)),
    ("BE", "Belgium", Some(Europe)),
    ("BF", "Burkina Faso", Some(Africa)),
    ("BG", "Bulgaria", Some(Europe)),
    ("BH", "Bahrain", Some(Asia)),
    ("BI", "Burundi", Some(Africa)),
    ("BJ", "Benin", Some(Africa)),
    ("BL", "Saint Barthélemy", Some(NorthAmerica)),
    ("BM", "Bermuda", Some(NorthAmerica)),
    ("BN", "Brunei Darussalam", Some(Asia)),
    ("BO", "Bolivia, Plurinational State of", Some(SouthAmerica)),
    ("BQ", "Bonaire, Sint Eustatius and Saba", Some(NorthAmerica)),
    ("BR", "Brazil", Some(SouthAmerica)),
    ("BS", "Bahamas", Some(NorthAmerica)),
    ("BT", "Bhutan", Some(Asia)),
    ("BV", "Bouvet Island", Some(Antarctica)),
    ("BW", "Botswana", Some(Africa)),
    ("BY", "Belarus", Some(Europe)),
    ("BZ", "Belize", Some(NorthAmerica)),
    ("CA", "Canada", Some(NorthAmerica)),
    ("CC", "Cocos (Keeling) Islands", Some(Asia)),
    ("CD", "Congo, The Democratic Republic of the", Some(Africa)),
    ("CF", "Central African Republic", Some(Africa)),
    ("CG", "Congo", Some(Africa)),
    ("CH", "Switzerland", Some(Europe)),
    ("CI", "Côte d'Ivoire", Some(Africa)),
    ("CK", "Cook Islands", Some(Oceania)),
    ("CL", "Chile", Some(SouthAmerica)),
    ("CM", "Cameroon", Some(Africa)),
    ("CN", "China", Some(Asia)),
    ("CO", "Colombia", Some(SouthAmerica)),
    ("CP", "Clipperton Island", None),
    ("CR", "Costa Rica", Some(NorthAmerica)),
    ("CU", "Cuba", Some(NorthAmerica)),
    ("CV", "Cabo Verde", Some(Africa)),
    ("CW", "Curaçao", Some(NorthAmerica)),
    ("CX", "Christmas Island", Some(Asia)),
    ("CY", "Cyprus", Some(Asia)),
    ("CZ", "Czechia", Some(Europe)),
    ("DE", "Germany", Some(Europe)),
    ("DJ", "Djibouti", Some(Africa)),
    ("DK", "Denmark", Some(Europe)),
    ("DM", "Dominica", Some(NorthAmerica)),
    ("DO", "Dominican Republic", Some(NorthAmerica)),
    ("DZ", "Algeria", Some(Africa)),
    ("EA", "Ceuta and Melilla", None),
    ("EC", "Ecuador", Some(SouthAmerica)),
    ("EE", "Estonia", Some(Europe)),
    ("EG", "Egypt", Some(Africa)),
    ("EH", "Western Sahara", Some(Africa)),
    ("ER", "Eritrea", Some(Africa)),
    ("ES", "Spain", Some(Europe)),
    ("ET", "Ethiopia", Some(Africa)),
    ("EU", "European Union", None),
    ("FI", "Finland", Some(Europe)),
    ("FJ", "Fiji", Some(Oceania)),
    ("FK", "Falkland Islands (Malvinas)", Some(SouthAmerica)),
    ("FM", "Micronesia, Federated States of", Some(Oceania)),
    ("FO", "Faroe Islands", Some(Europe)),
    ("FR", "France", Some(Europe)),
    ("GA", "Gabon", Some(Africa)),
    ("GB", "United Kingdom", Some(Europe)),
    ("GD", "Grenada", Some(NorthAmerica)),
    ("GE", "Georgia", Some(Asia)),
    ("GF", "French Guiana", Some(SouthAmerica)),
    ("GG", "Guernsey", Some(Europe)),
    ("GH", "Ghana", Some(Africa)),
    ("GI", "Gibraltar", Some(Europe)),
    ("GL", "Greenland", Some(NorthAmerica)),
    ("GM", "Gambia", Some(Africa)),
    ("GN", "Guinea", Some(Africa)),
    ("GP", "Guadeloupe", Some(NorthAmerica)),
    ("GQ", "Equatorial Guinea", Some(Africa)),
    ("GR", "Greece", Some(Europe)),
    ("GS", "South Georgia and the South Sandwich Islands", Some(Antarctica)),
    ("GT", "Guatemala", Some(NorthAmerica)),
    ("GU", "Guam", Some(Oceania)),
    ("GW", "Guinea-Bissau", Some(Africa)),
    ("GY", "Guyana", Some(SouthAmerica)),
    ("HK", "Hong Kong", Some(Asia)),
    ("HM", "Heard Island and McDonald Islands", Some(Antarctica)),
    ("HN", "Honduras", Some(NorthAmerica)),
    ("HR", "Croatia", Some(Europe)),
    ("HT", "Haiti", Some(NorthAmerica)),
    ("HU", "Hungary", Some(Europe)),
    ("IC", "Canary Islands", None),
    ("ID", "Indonesia", Some(Asia)),
    ("IE", "Ireland", Some(Europe)),
    ("IL", "Israel", Some(Asia)),
    ("IM", "Isle of Man", Some(Europe)),
    ("IN", "India", Some(Asia)),
    ("IO", "British Indian Ocean Territory", Some(Asia)),
    ("IQ", "Iraq", Some(Asia)),
    ("IR", "Iran, Islamic Republic of", Some(Asia)),
    ("IS", "Iceland", Some(Europe)),
    ("IT", "Italy", Some(Europe)),
    ("JE", "Jersey", Some(Europe)),
    ("JM", "Jamaica", Some(NorthAmerica)),
    ("JO", "Jordan", Some(Asia)),
    ("JP", "Japan", Some(Asia)),
    ("KE", "Kenya", Some(Africa)),
    ("KG", "Kyrgyzstan", Some(Asia)),
    ("KH", "Cambodia", Some(Asia)),
    ("KI", "Kiribati", Some(Oceania)),
    ("KM", "Comoros", Some(Africa)),
    ("KN", "Saint Kitts and Nevis", Some(NorthAmerica)),
    ("KP", "Korea, Democratic People's Republic of", Some(Asia)),
    ("KR", "Korea, Republic of", Some(Asia)),
    ("KW", "Kuwait", Some(Asia)),
    ("KY", "Cayman Islands", Some(NorthAmerica)),
    ("KZ", "Kazakhstan", Some(Asia)),
    ("LA", "Lao People's Democratic Republic", Some(Asia)),
    ("LB", "Lebanon", Some(Asia)),
    ("LC", "Saint Lucia", Some(NorthAmerica)),
    ("LI", "Liechtenstein", Some(Europe)),
    ("LK", "Sri Lanka", Some(Asia)),
    ("LR", "Liberia", Some(Africa)),
    ("LS", "Lesotho", Some(Africa)),
    ("LT", "Lithuania", Some(Europe)),
    ("LU", "Luxembourg", Some(Europe)),
    ("LV", "Latvia", Some(Europe)),
    ("LY", "Libya", Some(Africa)),
    ("MA", "Morocco", Some(Africa)),
    ("MC", "Monaco", Some(Europe)),
    ("MD", "Moldova, Republic of", Some(Europe)),
    ("ME", "Montenegro", Some(Europe)),
    ("MF", "Saint Martin (French part)", Some(NorthAmerica)),
    ("MG", "Madagascar", Some(Africa)),
    ("MH", "Marshall Islands", Some(Oceania)),
    ("MK", "North Macedonia", Some(Europe)),
    ("ML", "Mali", Some(Africa)),
    ("MM", "Myanmar", Some(Asia)),
    ("MN", "Mongolia", Some(Asia)),
    ("MO", "Macao", Some(Asia)),
    ("MP", "Northern Mariana Islands", Some(Oceania)),
    ("MQ", "Martinique", Some(NorthAmerica)),
    ("MR", "Mauritania", Some(Africa)),
    ("MS", "Montserrat", Some(NorthAmerica)),
    ("MT", "Malta", Some(Europe)),
    ("MU", "Mauritius", Some(Africa)),
    ("MV", "Maldives", Some(Asia)),
    ("MW", "Malawi", Some(Africa)),
    ("MX", "Mexico", Some(NorthAmerica)),
    ("MY", "Malaysia", Some(Asia)),
    ("MZ", "Mozambique", Some(Africa)),
    ("NA", "Namibia", Some(Africa)),
    ("NC", "New Caledonia", Some(Oceania)),
    ("NE", "Niger", Some(Africa)),
    ("NF", "Norfolk Island", Some(Oceania)),
    ("NG", "Nigeria", Some(Africa)),
    ("NI", "Nicaragua", Some(NorthAmerica)),
    ("NL", "Netherlands", Some(Europe)),
    ("NO", "Norway", Some(Europe)),
    ("NP", "Nepal", Some(Asia)),
    ("NR", "Nauru", Some(Oceania)),
    ("NU", "Niue", Some(Oceania)),
    ("NZ", "New Zealand", Some(Oceania)),
    ("OM", "Oman", Some(Asia)),
    ("PA", "Panama", Some(NorthAmerica)),
    ("PE", "Peru", Some(SouthAmerica)),
    ("PF", "French Polynesia", Some(Oceania)),
    ("PG", "Papua New Guinea", Some(Oceania)),
    ("PH", "Philippines", Some(Asia)),
    ("PK", "Pakistan", Some(Asia)),
    ("PL", "Poland", Some(Europe)),
    ("PM", "Saint Pierre and Miquelon", Some(NorthAmerica)),
    ("PN", "Pitcairn", Some(Oceania)),
    ("PR", "Puerto Rico", Some(NorthAmerica)),
    ("PS", "Palestine, State of", Some(Asia)),
    ("PT", "Portugal", Some(Europe)),
    ("PW", "Palau", Some(Oceania)),
    ("PY", "Paraguay", Some(SouthAmerica)),
    ("QA", "Qatar", Some(Asia)),
    ("RE", "Réunion", Some(Africa)),
    ("RO", "Romania", Some(Europe)),
    ("RS", "Serbia", Some(Europe)),
    ("RU", "Russian Federation", Some(Europe)),
    ("RW", "Rwanda", Some(Africa)),
    ("SA", "Saudi Arabia", Some(Asia)),
    ("SB", "Solomon Islands", Some(Oceania)),
    ("SC", "Seychelles", Some(Africa)),
    ("SD", "Sudan", Some(Africa)),
    ("SE", "Sweden", Some(Europe)),
    ("SG", "Singapore", Some(Asia)),
    ("SH", "Saint Helena, Ascension and Tristan da Cunha", Some(Africa)),
    ("SI", "Slovenia", Some(Europe)),
    ("SJ", "Svalbard and Jan Mayen", Some(Europe)),
    ("SK", "Slovakia", Some(Europe)),
    ("SL", "Sierra Leone", Some(Africa)),
    ("SM", "San Marino", Some(Europe)),
    ("SN", "Senegal", Some(Africa)),
    ("SO", "Somalia", Some(Africa)),
    ("SR", "Suriname", Some(SouthAmerica)),
    ("SS", "South Sudan", Some(Africa)),
    ("ST", "Sao Tome and Principe", Some(Africa)),
    ("SV", "El Salvador", Some(NorthAmerica)),
    ("SX", "Sint Maarten (Dutch part)", Some(NorthAmerica)),
    ("SY", "Syrian Arab Republic", Some(Asia)),
    ("SZ", "Eswatini", Some(Africa)),
    ("TC", "Turks and Caicos Islands", Some(NorthAmerica)),
    ("TD", "Chad", Some(Africa)),
    ("TF", "French Southern Territories", Some(Antarctica)),
    ("TG", "Togo", Some(Africa)),
    ("TH", "Thailand", Some(Asia)),
    ("TJ", "Tajikistan", Some(Asia)),
    ("TK", "Tokelau", Some(Oceania)),
    ("TL", "Timor-Leste", Some(Asia)),
    ("TM", "Turkmenistan", Some(Asia)),
    ("TN", "Tunisia", Some(Africa)),
    ("TO", "Tonga", Some(Oceania)),
    ("TR", "Türkiye", Some(Asia)),
    ("TT", "Trinidad and Tobago", Some(NorthAmerica)),
    ("TV", "Tuvalu", Some(Oceania)),
    ("TW", "Taiwan, Province of China", Some(Asia)),
    ("TZ", "Tanzania, United Republic of", Some(Africa)),
    ("UA", "Ukraine", Some(Europe)),
    ("UG", "Uganda", Some(Africa)),
    ("UM", "United States Minor Outlying Islands", None),
    ("US", "United States", Some(NorthAmerica)),
    ("UY", "Uruguay", Some(SouthAmerica)),
    ("UZ", "Uzbekistan", Some(Asia)),
    ("VA", "Holy See (Vatican City State)", Some(Europe)),
    ("VC", "Saint Vincent and the Grenadines", Some(NorthAmerica)),
    ("VE", "Venezuela, Bolivarian Republic of", Some(SouthAmerica)),
    ("VG", "Virgin Islands, British", Some(NorthAmerica)),
    ("VI", "Virgin Islands, U.S.", Some(NorthAmerica)),
    ("VN", "Viet Nam", Some(Asia)),
    ("VU", "Vanuatu", Some(Oceania)),
    ("WF", "Wallis and Futuna", Some(Oceania)),
    ("WS", "Samoa", Some(Oceania)),
    ("XK", "Kosovo", Some(Europe)),
    ("YE", "Yemen", Some(Asia)),
    ("YT", "Mayotte", Some(Africa)),
    ("ZA", "South Africa", Some(Africa)),
    ("ZM", "Zambia", Some(Africa)),
    ("ZW", "Zimbabwe", Some(Africa)),
];
