//! Representative coordinates for IANA timezones.
//!
//! Positions come from the tz database `zone.tab` (the principal city of each
//! zone); backward-compatible names map onto the zone they link to. Both tables
//! are sorted by name for binary search.

/// (zone, latitude, longitude)
pub(super) const ZONE_COORDINATES: &[(&str, f64, f64)] = &[
    ("Africa/Abidjan", 5.3167, -4.0333),
    ("Africa/Accra", 5.55, -0.2167),
    ("Africa/Addis_Ababa", 9.0333, 38.7),
    ("Africa/Algiers", 36.7833, 3.05),
    ("Africa/Asmara", 15.3333, 38.8833),
    ("Africa/Bamako", 12.65, -8.0),
    ("Africa/Bangui", 4.3667, 18.5833),
    ("Africa/Banjul", 13.4667, -16.65),
    ("Africa/Bissau", 11.85, -15.5833),
    ("Africa/Blantyre", -15.7833, 35.0),
    ("Africa/Brazzaville", -4.2667, 15.2833),
    ("Africa/Bujumbura", -3.3833, 29.3667),
    ("Africa/Cairo", 30.05, 31.25),
    ("Africa/Casablanca", 33.65, -7.5833),
    ("Africa/Ceuta", 35.8833, -5.3167),
    ("Africa/Conakry", 9.5167, -13.7167),
    ("Africa/Dakar", 14.6667, -17.4333),
    ("Africa/Dar_es_Salaam", -6.8, 39.2833),
    ("Africa/Djibouti", 11.6, 43.15),
    ("Africa/Douala", 4.05, 9.7),
    ("Africa/El_Aaiun", 27.15, -13.2),
    ("Africa/Freetown", 8.5, -13.25),
    ("Africa/Gaborone", -24.65, 25.9167),
    ("Africa/Harare", -17.8333, 31.05),
    ("Africa/Johannesburg", -26.25, 28.0),
    ("Africa/Juba", 4.85, 31.6167),
    ("Africa/Kampala", 0.3167, 32.4167),
    ("Africa/Khartoum", 15.6, 32.5333),
    ("Africa/Kigali", -1.95, 30.0667),
    ("Africa/Kinshasa", -4.3, 15.3),
    ("Africa/Lagos", 6.45, 3.4),
    ("Africa/Libreville", 0.3833, 9.45),
    ("Africa/Lome", 6.1333, 1.2167),
    ("Africa/Luanda", -8.8, 13.2333),
    ("Africa/Lubumbashi", -11.6667, 27.4667),
    ("Africa/Lusaka", -15.4167, 28.2833),
    ("Africa/Malabo", 3.75, 8.7833),
    ("Africa/Maputo", -25.9667, 32.5833),
    ("Africa/Maseru", -29.4667, 27.5),
    ("Africa/Mbabane", -26.3, 31.1),
    ("Africa/Mogadishu", 2.0667, 45.3667),
    ("Africa/Monrovia", 6.3, -10.7833),
    ("Africa/Nairobi", -1.2833, 36.8167),
    ("Africa/Ndjamena", 12.1167, 15.05),
    ("Africa/Niamey", 13.5167, 2.1167),
    ("Africa/Nouakchott", 18.1, -15.95),
    ("Africa/Ouagadougou", 12.3667, -1.5167),
    ("Africa/Porto-Novo", 6.4833, 2.6167),
    ("Africa/Sao_Tome", 0.3333, 6.7333),
    ("Africa/Tripoli", 32.9, 13.1833),
    ("Africa/Tunis", 36.8, 10.1833),
    ("Africa/Windhoek", -22.5667, 17.1),
    ("America/Adak", 51.88, -176.6581),
    ("America/Anchorage", 61.2181, -149.9003),
    ("America/Anguilla", 18.2, -63.0667),
    ("America/Antigua", 17.05, -61.8),
    ("America/Araguaina", -7.2, -48.2),
    ("America/Argentina/Buenos_Aires", -34.6, -58.45),
    ("America/Argentina/Catamarca", -28.4667, -65.7833),
    ("America/Argentina/Cordoba", -31.4, -64.1833),
    ("America/Argentina/Jujuy", -24.1833, -65.3),
    ("America/Argentina/La_Rioja", -29.4333, -66.85),
    ("America/Argentina/Mendoza", -32.8833, -68.8167),
    ("America/Argentina/Rio_Gallegos", -51.6333, -69.2167),
    ("America/Argentina/Salta", -24.7833, -65.4167),
    ("America/Argentina/San_Juan", -31.5333, -68.5167),
    ("America/Argentina/San_Luis", -33.3167, -66.35),
    ("America/Argentina/Tucuman", -26.8167, -65.2167),
    ("America/Argentina/Ushuaia", -54.8, -68.3),
    ("America/Aruba", 12.5, -69.9667),
    ("America/Asuncion", -25.2667, -57.6667),
    ("America/Atikokan", 48.7586, -91.6217),
    ("America/Bahia", -12.9833, -38.5167),
    ("America/Bahia_Banderas", 20.8, -105.25),
    ("America/Barbados", 13.1, -59.6167),
    ("America/Belem", -1.45, -48.4833),
    ("America/Belize", 17.5, -88.2),
    ("America/Blanc-Sablon", 51.4167, -57.1167),
    ("America/Boa_Vista", 2.8167, -60.6667),
    ("America/Bogota", 4.6, -74.0833),
    ("America/Boise", 43.6136, -116.2025),
    ("America/Cambridge_Bay", 69.1139, -105.0528),
    ("America/Campo_Grande", -20.45, -54.6167),
    ("America/Cancun", 21.0833, -86.7667),
    ("America/Caracas", 10.5, -66.9333),
    ("America/Cayenne", 4.9333, -52.3333),
    ("America/Cayman", 19.3, -81.3833),
    ("America/Chicago", 41.85, -87.65),
    ("America/Chihuahua", 28.6333, -106.0833),
    ("America/Ciudad_Juarez", 31.7333, -106.4833),
    ("America/Costa_Rica", 9.9333, -84.0833),
    ("America/Coyhaique", -45.5667, -72.0667),
    ("America/Creston", 49.1, -116.5167),
    ("America/Cuiaba", -15.5833, -56.0833),
    ("America/Curacao", 12.1833, -69.0),
    ("America/Danmarkshavn", 76.7667, -18.6667),
    ("America/Dawson", 64.0667, -139.4167),
    ("America/Dawson_Creek", 55.7667, -120.2333),
    ("America/Denver", 39.7392, -104.9842),
    ("America/Detroit", 42.3314, -83.0458),
    ("America/Dominica", 15.3, -61.4),
    ("America/Edmonton", 53.55, -113.4667),
    ("America/Eirunepe", -6.6667, -69.8667),
    ("America/El_Salvador", 13.7, -89.2),
    ("America/Fort_Nelson", 58.8, -122.7),
    ("America/Fortaleza", -3.7167, -38.5),
    ("America/Glace_Bay", 46.2, -59.95),
    ("America/Goose_Bay", 53.3333, -60.4167),
    ("America/Grand_Turk", 21.4667, -71.1333),
    ("America/Grenada", 12.05, -61.75),
    ("America/Guadeloupe", 16.2333, -61.5333),
    ("America/Guatemala", 14.6333, -90.5167),
    ("America/Guayaquil", -2.1667, -79.8333),
    ("America/Guyana", 6.8, -58.1667),
    ("America/Halifax", 44.65, -63.6),
    ("America/Havana", 23.1333, -82.3667),
    ("America/Hermosillo", 29.0667, -110.9667),
    ("America/Indiana/Indianapolis", 39.7683, -86.1581),
    ("America/Indiana/Knox", 41.2958, -86.625),
    ("America/Indiana/Marengo", 38.3756, -86.3447),
    ("America/Indiana/Petersburg", 38.4919, -87.2786),
    ("America/Indiana/Tell_City", 37.9531, -86.7614),
    ("America/Indiana/Vevay", 38.7478, -85.0672),
    ("America/Indiana/Vincennes", 38.6772, -87.5286),
    ("America/Indiana/Winamac", 41.0514, -86.6031),
    ("America/Inuvik", 68.3497, -133.7167),
    ("America/Iqaluit", 63.7333, -68.4667),
    ("America/Jamaica", 17.9681, -76.7933),
    ("America/Juneau", 58.3019, -134.4197),
    ("America/Kentucky/Louisville", 38.2542, -85.7594),
    ("America/Kentucky/Monticello", 36.8297, -84.8492),
    ("America/Kralendijk", 12.1508, -68.2767),
    ("America/La_Paz", -16.5, -68.15),
    ("America/Lima", -12.05, -77.05),
    ("America/Los_Angeles", 34.0522, -118.2428),
    ("America/Lower_Princes", 18.0514, -63.0472),
    ("America/Maceio", -9.6667, -35.7167),
    ("America/Managua", 12.15, -86.2833),
    ("America/Manaus", -3.1333, -60.0167),
    ("America/Marigot", 18.0667, -63.0833),
    ("America/Martinique", 14.6, -61.0833),
    ("America/Matamoros", 25.8333, -97.5),
    ("America/Mazatlan", 23.2167, -106.4167),
    ("America/Menominee", 45.1078, -87.6142),
    ("America/Merida", 20.9667, -89.6167),
    ("America/Metlakatla", 55.1269, -131.5764),
    ("America/Mexico_City", 19.4, -99.15),
    ("America/Miquelon", 47.05, -56.3333),
    ("America/Moncton", 46.1, -64.7833),
    ("America/Monterrey", 25.6667, -100.3167),
    ("America/Montevideo", -34.9092, -56.2125),
    ("America/Montserrat", 16.7167, -62.2167),
    ("America/Nassau", 25.0833, -77.35),
    ("America/New_York", 40.7142, -74.0064),
    ("America/Nome", 64.5011, -165.4064),
    ("America/Noronha", -3.85, -32.4167),
    ("America/North_Dakota/Beulah", 47.2642, -101.7778),
    ("America/North_Dakota/Center", 47.1164, -101.2992),
    ("America/North_Dakota/New_Salem", 46.845, -101.4108),
    ("America/Nuuk", 64.1833, -51.7333),
    ("America/Ojinaga", 29.5667, -104.4167),
    ("America/Panama", 8.9667, -79.5333),
    ("America/Paramaribo", 5.8333, -55.1667),
    ("America/Phoenix", 33.4483, -112.0733),
    ("America/Port-au-Prince", 18.5333, -72.3333),
    ("America/Port_of_Spain", 10.65, -61.5167),
    ("America/Porto_Velho", -8.7667, -63.9),
    ("America/Puerto_Rico", 18.4683, -66.1061),
    ("America/Punta_Arenas", -53.15, -70.9167),
    ("America/Rankin_Inlet", 62.8167, -92.0831),
    ("America/Recife", -8.05, -34.9),
    ("America/Regina", 50.4, -104.65),
    ("America/Resolute", 74.6956, -94.8292),
    ("America/Rio_Branco", -9.9667, -67.8),
    ("America/Santarem", -2.4333, -54.8667),
    ("America/Santiago", -33.45, -70.6667),
    ("America/Santo_Domingo", 18.4667, -69.9),
    ("America/Sao_Paulo", -23.5333, -46.6167),
    ("America/Scoresbysund", 70.4833, -21.9667),
    ("America/Sitka", 57.1764, -135.3019),
    ("America/St_Barthelemy", 17.8833, -62.85),
    ("America/St_Johns", 47.5667, -52.7167),
    ("America/St_Kitts", 17.3, -62.7167),
    ("America/St_Lucia", 14.0167, -61.0),
    ("America/St_Thomas", 18.35, -64.9333),
    ("America/St_Vincent", 13.15, -61.2333),
    ("America/Swift_Current", 50.2833, -107.8333),
    ("America/Tegucigalpa", 14.1, -87.2167),
    ("America/Thule", 76.5667, -68.7833),
    ("America/Tijuana", 32.5333, -117.0167),
    ("America/Toronto", 43.65, -79.3833),
    ("America/Tortola", 18.45, -64.6167),
    ("America/Vancouver", 49.2667, -123.1167),
    ("America/Whitehorse", 60.7167, -135.05),
    ("America/Winnipeg", 49.8833, -97.15),
    ("America/Yakutat", 59.5469, -139.7272),
    ("Antarctica/Casey", -66.2833, 110.5167),
    ("Antarctica/Davis", -68.5833, 77.9667),
    ("Antarctica/DumontDUrville", -66.6667, 140.0167),
    ("Antarctica/Macquarie", -54.5, 158.95),
    ("Antarctica/Mawson", -67.6, 62.8833),
    ("Antarctica/McMurdo", -77.8333, 166.6),
    ("Antarctica/Palmer", -64.8, -64.1),
    ("Antarctica/Rothera", -67.5667, -68.1333),
    ("Antarctica/Syowa", -69.0061, 39.59),
    ("Antarctica/Troll", -72.0114, 2.535),
    ("Antarctica/Vostok", -78.4, 106.9),
    ("Arctic/Longyearbyen", 78.0, 16.0),
    ("Asia/Aden", 12.75, 45.2),
    ("Asia/Almaty", 43.25, 76.95),
    ("Asia/Amman", 31.95, 35.9333),
    ("Asia/Anadyr", 64.75, 177.4833),
    ("Asia/Aqtau", 44.5167, 50.2667),
    ("Asia/Aqtobe", 50.2833, 57.1667),
    ("Asia/Ashgabat", 37.95, 58.3833),
    ("Asia/Atyrau", 47.1167, 51.9333),
    ("Asia/Baghdad", 33.35, 44.4167),
    ("Asia/Bahrain", 26.3833, 50.5833),
    ("Asia/Baku", 40.3833, 49.85),
    ("Asia/Bangkok", 13.75, 100.5167),
    ("Asia/Barnaul", 53.3667, 83.75),
    ("Asia/Beirut", 33.8833, 35.5),
    ("Asia/Bishkek", 42.9, 74.6),
    ("Asia/Brunei", 4.9333, 114.9167),
    ("Asia/Chita", 52.05, 113.4667),
    ("Asia/Colombo", 6.9333, 79.85),
    ("Asia/Damascus", 33.5, 36.3),
    ("Asia/Dhaka", 23.7167, 90.4167),
    ("Asia/Dili", -8.55, 125.5833),
    ("Asia/Dubai", 25.3, 55.3),
    ("Asia/Dushanbe", 38.5833, 68.8),
    ("Asia/Famagusta", 35.1167, 33.95),
    ("Asia/Gaza", 31.5, 34.4667),
    ("Asia/Hebron", 31.5333, 35.095),
    ("Asia/Ho_Chi_Minh", 10.75, 106.6667),
    ("Asia/Hong_Kong", 22.2833, 114.15),
    ("Asia/Hovd", 48.0167, 91.65),
    ("Asia/Irkutsk", 52.2667, 104.3333),
    ("Asia/Jakarta", -6.1667, 106.8),
    ("Asia/Jayapura", -2.5333, 140.7),
    ("Asia/Jerusalem", 31.7806, 35.2239),
    ("Asia/Kabul", 34.5167, 69.2),
    ("Asia/Kamchatka", 53.0167, 158.65),
    ("Asia/Karachi", 24.8667, 67.05),
    ("Asia/Kathmandu", 27.7167, 85.3167),
    ("Asia/Khandyga", 62.6564, 135.5539),
    ("Asia/Kolkata", 22.5333, 88.3667),
    ("Asia/Krasnoyarsk", 56.0167, 92.8333),
    ("Asia/Kuala_Lumpur", 3.1667, 101.7),
    ("Asia/Kuching", 1.55, 110.3333),
    ("Asia/Kuwait", 29.3333, 47.9833),
    ("Asia/Macau", 22.1972, 113.5417),
    ("Asia/Magadan", 59.5667, 150.8),
    ("Asia/Makassar", -5.1167, 119.4),
    ("Asia/Manila", 14.5867, 120.9678),
    ("Asia/Muscat", 23.6, 58.5833),
    ("Asia/Nicosia", 35.1667, 33.3667),
    ("Asia/Novokuznetsk", 53.75, 87.1167),
    ("Asia/Novosibirsk", 55.0333, 82.9167),
    ("Asia/Omsk", 55.0, 73.4),
    ("Asia/Oral", 51.2167, 51.35),
    ("Asia/Phnom_Penh", 11.55, 104.9167),
    ("Asia/Pontianak", -0.0333, 109.3333),
    ("Asia/Pyongyang", 39.0167, 125.75),
    ("Asia/Qatar", 25.2833, 51.5333),
    ("Asia/Qostanay", 53.2, 63.6167),
    ("Asia/Qyzylorda", 44.8, 65.4667),
    ("Asia/Riyadh", 24.6333, 46.7167),
    ("Asia/Sakhalin", 46.9667, 142.7),
    ("Asia/Samarkand", 39.6667, 66.8),
    ("Asia/Seoul", 37.55, 126.9667),
    ("Asia/Shanghai", 31.2333, 121.4667),
    ("Asia/Singapore", 1.2833, 103.85),
    ("Asia/Srednekolymsk", 67.4667, 153.7167),
    ("Asia/Taipei", 25.05, 121.5),
    ("Asia/Tashkent", 41.3333, 69.3),
    ("Asia/Tbilisi", 41.7167, 44.8167),
    ("Asia/Tehran", 35.6667, 51.4333),
    ("Asia/Thimphu", 27.4667, 89.65),
    ("Asia/Tokyo", 35.6544, 139.7447),
    ("Asia/Tomsk", 56.5, 84.9667),
    ("Asia/Ulaanbaatar", 47.9167, 106.8833),
    ("Asia/Urumqi", 43.8, 87.5833),
    ("Asia/Ust-Nera", 64.5603, 143.2267),
    ("Asia/Vientiane", 17.9667, 102.6),
    ("Asia/Vladivostok", 43.1667, 131.9333),
    ("Asia/Yakutsk", 62.0, 129.6667),
    ("Asia/Yangon", 16.7833, 96.1667),
    ("Asia/Yekaterinburg", 56.85, 60.6),
    ("Asia/Yerevan", 40.1833, 44.5),
    ("Atlantic/Azores", 37.7333, -25.6667),
    ("Atlantic/Bermuda", 32.2833, -64.7667),
    ("Atlantic/Canary", 28.1, -15.4),
    ("Atlantic/Cape_Verde", 14.9167, -23.5167),
    ("Atlantic/Faroe", 62.0167, -6.7667),
    ("Atlantic/Madeira", 32.6333, -16.9),
    ("Atlantic/Reykjavik", 64.15, -21.85),
    ("Atlantic/South_Georgia", -54.2667, -36.5333),
    ("Atlantic/St_Helena", -15.9167, -5.7),
    ("Atlantic/Stanley", -51.7, -57.85),
    ("Australia/Adelaide", -34.9167, 138.5833),
    ("Australia/Brisbane", -27.4667, 153.0333),
    ("Australia/Broken_Hill", -31.95, 141.45),
    ("Australia/Darwin", -12.4667, 130.8333),
    ("Australia/Eucla", -31.7167, 128.8667),
    ("Australia/Hobart", -42.8833, 147.3167),
    ("Australia/Lindeman", -20.2667, 149.0),
    ("Australia/Lord_Howe", -31.55, 159.0833),
    ("Australia/Melbourne", -37.8167, 144.9667),
    ("Australia/Perth", -31.95, 115.85),
    ("Australia/Sydney", -33.8667, 151.2167),
    ("Etc/UTC", 0.0, 0.0),
    ("Europe/Amsterdam", 52.3667, 4.9),
    ("Europe/Andorra", 42.5, 1.5167),
    ("Europe/Astrakhan", 46.35, 48.05),
    ("Europe/Athens", 37.9667, 23.7167),
    ("Europe/Belgrade", 44.8333, 20.5),
    ("Europe/Berlin", 52.5, 13.3667),
    ("Europe/Bratislava", 48.15, 17.1167),
    ("Europe/Brussels", 50.8333, 4.3333),
    ("Europe/Bucharest", 44.4333, 26.1),
    ("Europe/Budapest", 47.5, 19.0833),
    ("Europe/Busingen", 47.7, 8.6833),
    ("Europe/Chisinau", 47.0, 28.8333),
    ("Europe/Copenhagen", 55.6667, 12.5833),
    ("Europe/Dublin", 53.3333, -6.25),
    ("Europe/Gibraltar", 36.1333, -5.35),
    ("Europe/Guernsey", 49.4547, -2.5361),
    ("Europe/Helsinki", 60.1667, 24.9667),
    ("Europe/Isle_of_Man", 54.15, -4.4667),
    ("Europe/Istanbul", 41.0167, 28.9667),
    ("Europe/Jersey", 49.1836, -2.1067),
    ("Europe/Kaliningrad", 54.7167, 20.5),
    ("Europe/Kirov", 58.6, 49.65),
    ("Europe/Kyiv", 50.4333, 30.5167),
    ("Europe/Lisbon", 38.7167, -9.1333),
    ("Europe/Ljubljana", 46.05, 14.5167),
    ("Europe/London", 51.5083, -0.1253),
    ("Europe/Luxembourg", 49.6, 6.15),
    ("Europe/Madrid", 40.4, -3.6833),
    ("Europe/Malta", 35.9, 14.5167),
    ("Europe/Mariehamn", 60.1, 19.95),
    ("Europe/Minsk", 53.9, 27.5667),
    ("Europe/Monaco", 43.7, 7.3833),
    ("Europe/Moscow", 55.7558, 37.6178),
    ("Europe/Oslo", 59.9167, 10.75),
    ("Europe/Paris", 48.8667, 2.3333),
    ("Europe/Podgorica", 42.4333, 19.2667),
    ("Europe/Prague", 50.0833, 14.4333),
    ("Europe/Riga", 56.95, 24.1),
    ("Europe/Rome", 41.9, 12.4833),
    ("Europe/Samara", 53.2, 50.15),
    ("Europe/San_Marino", 43.9167, 12.4667),
    ("Europe/Sarajevo", 43.8667, 18.4167),
    ("Europe/Saratov", 51.5667, 46.0333),
    ("Europe/Simferopol", 44.95, 34.1),
    ("Europe/Skopje", 41.9833, 21.4333),
    ("Europe/Sofia", 42.6833, 23.3167),
    ("Europe/Stockholm", 59.3333, 18.05),
    ("Europe/Tallinn", 59.4167, 24.75),
    ("Europe/Tirane", 41.3333, 19.8333),
    ("Europe/Ulyanovsk", 54.3333, 48.4),
    ("Europe/Vaduz", 47.15, 9.5167),
    ("Europe/Vatican", 41.9022, 12.4531),
    ("Europe/Vienna", 48.2167, 16.3333),
    ("Europe/Vilnius", 54.6833, 25.3167),
    ("Europe/Volgograd", 48.7333, 44.4167),
    ("Europe/Warsaw", 52.25, 21.0),
    ("Europe/Zagreb", 45.8, 15.9667),
    ("Europe/Zurich", 47.3833, 8.5333),
    ("Indian/Antananarivo", -18.9167, 47.5167),
    ("Indian/Chagos", -7.3333, 72.4167),
    ("Indian/Christmas", -10.4167, 105.7167),
    ("Indian/Cocos", -12.1667, 96.9167),
    ("Indian/Comoro", -11.6833, 43.2667),
    ("Indian/Kerguelen", -49.3528, 70.2175),
    ("Indian/Mahe", -4.6667, 55.4667),
    ("Indian/Maldives", 4.1667, 73.5),
    ("Indian/Mauritius", -20.1667, 57.5),
    ("Indian/Mayotte", -12.7833, 45.2333),
    ("Indian/Reunion", -20.8667, 55.4667),
    ("Pacific/Apia", -13.8333, -171.7333),
    ("Pacific/Auckland", -36.8667, 174.7667),
    ("Pacific/Bougainville", -6.2167, 155.5667),
    ("Pacific/Chatham", -43.95, -176.55),
    ("Pacific/Chuuk", 7.4167, 151.7833),
    ("Pacific/Easter", -27.15, -109.4333),
    ("Pacific/Efate", -17.6667, 168.4167),
    ("Pacific/Fakaofo", -9.3667, -171.2333),
    ("Pacific/Fiji", -18.1333, 178.4167),
    ("Pacific/Funafuti", -8.5167, 179.2167),
    ("Pacific/Galapagos", -0.9, -89.6),
    ("Pacific/Gambier", -23.1333, -134.95),
    ("Pacific/Guadalcanal", -9.5333, 160.2),
    ("Pacific/Guam", 13.4667, 144.75),
    ("Pacific/Honolulu", 21.3069, -157.8583),
    ("Pacific/Kanton", -2.7833, -171.7167),
    ("Pacific/Kiritimati", 1.8667, -157.3333),
    ("Pacific/Kosrae", 5.3167, 162.9833),
    ("Pacific/Kwajalein", 9.0833, 167.3333),
    ("Pacific/Majuro", 7.15, 171.2),
    ("Pacific/Marquesas", -9.0, -139.5),
    ("Pacific/Midway", 28.2167, -177.3667),
    ("Pacific/Nauru", -0.5167, 166.9167),
    ("Pacific/Niue", -19.0167, -169.9167),
    ("Pacific/Norfolk", -29.05, 167.9667),
    ("Pacific/Noumea", -22.2667, 166.45),
    ("Pacific/Pago_Pago", -14.2667, -170.7),
    ("Pacific/Palau", 7.3333, 134.4833),
    ("Pacific/Pitcairn", -25.0667, -130.0833),
    ("Pacific/Pohnpei", 6.9667, 158.2167),
    ("Pacific/Port_Moresby", -9.5, 147.1667),
    ("Pacific/Rarotonga", -21.2333, -159.7667),
    ("Pacific/Saipan", 15.2, 145.75),
    ("Pacific/Tahiti", -17.5333, -149.5667),
    ("Pacific/Tarawa", 1.4167, 173.0),
    ("Pacific/Tongatapu", -21.1333, -175.2),
    ("Pacific/Wake", 19.2833, 166.6167),
    ("Pacific/Wallis", -13.3, -176.1667),
];

/// (link, zone)
pub(super) const ZONE_LINKS: &[(&str, &str)] = &[
    ("Africa/Asmera", "Africa/Nairobi"),
    ("Africa/Timbuktu", "Africa/Abidjan"),
    ("America/Argentina/ComodRivadavia", "America/Argentina/Catamarca"),
    ("America/Atka", "America/Adak"),
    ("America/Buenos_Aires", "America/Argentina/Buenos_Aires"),
    ("America/Catamarca", "America/Argentina/Catamarca"),
    ("America/Coral_Harbour", "America/Panama"),
    ("America/Cordoba", "America/Argentina/Cordoba"),
    ("America/Ensenada", "America/Tijuana"),
    ("America/Fort_Wayne", "America/Indiana/Indianapolis"),
    ("America/Godthab", "America/Nuuk"),
    ("America/Indianapolis", "America/Indiana/Indianapolis"),
    ("America/Jujuy", "America/Argentina/Jujuy"),
    ("America/Knox_IN", "America/Indiana/Knox"),
    ("America/Louisville", "America/Kentucky/Louisville"),
    ("America/Mendoza", "America/Argentina/Mendoza"),
    ("America/Montreal", "America/Toronto"),
    ("America/Nipigon", "America/Toronto"),
    ("America/Pangnirtung", "America/Iqaluit"),
    ("America/Porto_Acre", "America/Rio_Branco"),
    ("America/Rainy_River", "America/Winnipeg"),
    ("America/Rosario", "America/Argentina/Cordoba"),
    ("America/Santa_Isabel", "America/Tijuana"),
    ("America/Shiprock", "America/Denver"),
    ("America/Thunder_Bay", "America/Toronto"),
    ("America/Virgin", "America/Puerto_Rico"),
    ("America/Yellowknife", "America/Edmonton"),
    ("Antarctica/South_Pole", "Pacific/Auckland"),
    ("Asia/Ashkhabad", "Asia/Ashgabat"),
    ("Asia/Calcutta", "Asia/Kolkata"),
    ("Asia/Choibalsan", "Asia/Ulaanbaatar"),
    ("Asia/Chongqing", "Asia/Shanghai"),
    ("Asia/Chungking", "Asia/Shanghai"),
    ("Asia/Dacca", "Asia/Dhaka"),
    ("Asia/Harbin", "Asia/Shanghai"),
    ("Asia/Istanbul", "Europe/Istanbul"),
    ("Asia/Kashgar", "Asia/Urumqi"),
    ("Asia/Katmandu", "Asia/Kathmandu"),
    ("Asia/Macao", "Asia/Macau"),
    ("Asia/Rangoon", "Asia/Yangon"),
    ("Asia/Saigon", "Asia/Ho_Chi_Minh"),
    ("Asia/Tel_Aviv", "Asia/Jerusalem"),
    ("Asia/Thimbu", "Asia/Thimphu"),
    ("Asia/Ujung_Pandang", "Asia/Makassar"),
    ("Asia/Ulan_Bator", "Asia/Ulaanbaatar"),
    ("Atlantic/Faeroe", "Atlantic/Faroe"),
    ("Atlantic/Jan_Mayen", "Europe/Berlin"),
    ("Australia/ACT", "Australia/Sydney"),
    ("Australia/Canberra", "Australia/Sydney"),
    ("Australia/Currie", "Australia/Hobart"),
    ("Australia/LHI", "Australia/Lord_Howe"),
    ("Australia/NSW", "Australia/Sydney"),
    ("Australia/North", "Australia/Darwin"),
    ("Australia/Queensland", "Australia/Brisbane"),
    ("Australia/South", "Australia/Adelaide"),
    ("Australia/Tasmania", "Australia/Hobart"),
    ("Australia/Victoria", "Australia/Melbourne"),
    ("Australia/West", "Australia/Perth"),
    ("Australia/Yancowinna", "Australia/Broken_Hill"),
    ("Brazil/Acre", "America/Rio_Branco"),
    ("Brazil/DeNoronha", "America/Noronha"),
    ("Brazil/East", "America/Sao_Paulo"),
    ("Brazil/West", "America/Manaus"),
    ("CET", "Europe/Brussels"),
    ("CST6CDT", "America/Chicago"),
    ("Canada/Atlantic", "America/Halifax"),
    ("Canada/Central", "America/Winnipeg"),
    ("Canada/Eastern", "America/Toronto"),
    ("Canada/Mountain", "America/Edmonton"),
    ("Canada/Newfoundland", "America/St_Johns"),
    ("Canada/Pacific", "America/Vancouver"),
    ("Canada/Saskatchewan", "America/Regina"),
    ("Canada/Yukon", "America/Whitehorse"),
    ("Chile/Continental", "America/Santiago"),
    ("Chile/EasterIsland", "Pacific/Easter"),
    ("Cuba", "America/Havana"),
    ("EET", "Europe/Athens"),
    ("EST", "America/Panama"),
    ("EST5EDT", "America/New_York"),
    ("Egypt", "Africa/Cairo"),
    ("Eire", "Europe/Dublin"),
    ("Etc/UCT", "Etc/UTC"),
    ("Etc/Universal", "Etc/UTC"),
    ("Etc/Zulu", "Etc/UTC"),
    ("Europe/Belfast", "Europe/London"),
    ("Europe/Kiev", "Europe/Kyiv"),
    ("Europe/Nicosia", "Asia/Nicosia"),
    ("Europe/Tiraspol", "Europe/Chisinau"),
    ("Europe/Uzhgorod", "Europe/Kyiv"),
    ("Europe/Zaporozhye", "Europe/Kyiv"),
    ("GB", "Europe/London"),
    ("GB-Eire", "Europe/London"),
    ("HST", "Pacific/Honolulu"),
    ("Hongkong", "Asia/Hong_Kong"),
    ("Iceland", "Africa/Abidjan"),
    ("Iran", "Asia/Tehran"),
    ("Israel", "Asia/Jerusalem"),
    ("Jamaica", "America/Jamaica"),
    ("Japan", "Asia/Tokyo"),
    ("Kwajalein", "Pacific/Kwajalein"),
    ("Libya", "Africa/Tripoli"),
    ("MET", "Europe/Brussels"),
    ("MST", "America/Phoenix"),
    ("MST7MDT", "America/Denver"),
    ("Mexico/BajaNorte", "America/Tijuana"),
    ("Mexico/BajaSur", "America/Mazatlan"),
    ("Mexico/General", "America/Mexico_City"),
    ("NZ", "Pacific/Auckland"),
    ("NZ-CHAT", "Pacific/Chatham"),
    ("Navajo", "America/Denver"),
    ("PRC", "Asia/Shanghai"),
    ("PST8PDT", "America/Los_Angeles"),
    ("Pacific/Enderbury", "Pacific/Kanton"),
    ("Pacific/Johnston", "Pacific/Honolulu"),
    ("Pacific/Ponape", "Pacific/Guadalcanal"),
    ("Pacific/Samoa", "Pacific/Pago_Pago"),
    ("Pacific/Truk", "Pacific/Port_Moresby"),
    ("Pacific/Yap", "Pacific/Port_Moresby"),
    ("Poland", "Europe/Warsaw"),
    ("Portugal", "Europe/Lisbon"),
    ("ROC", "Asia/Taipei"),
    ("ROK", "Asia/Seoul"),
    ("Singapore", "Asia/Singapore"),
    ("Turkey", "Europe/Istanbul"),
    ("UCT", "Etc/UTC"),
    ("US/Alaska", "America/Anchorage"),
    ("US/Aleutian", "America/Adak"),
    ("US/Arizona", "America/Phoenix"),
    ("US/Central", "America/Chicago"),
    ("US/East-Indiana", "America/Indiana/Indianapolis"),
    ("US/Eastern", "America/New_York"),
    ("US/Hawaii", "Pacific/Honolulu"),
    ("US/Indiana-Starke", "America/Indiana/Knox"),
    ("US/Michigan", "America/Detroit"),
    ("US/Mountain", "America/Denver"),
    ("US/Pacific", "America/Los_Angeles"),
    ("US/Samoa", "Pacific/Pago_Pago"),
    ("UTC", "Etc/UTC"),
    ("Universal", "Etc/UTC"),
    ("W-SU", "Europe/Moscow"),
    ("WET", "Europe/Lisbon"),
    ("Zulu", "Etc/UTC"),
];
