//! The 4096-word legacy mnemonic table. Its length is the radix base
//! for decoding 22-word phrases (12 bits per word).

pub(super) const WORDS: [&str; 4096] = [
    "abacus", "abandon", "abbey", "abdomen", "abide", "ability", "ablaze", "able",
    "aboard", "abode", "abolish", "about", "above", "abrupt", "absence", "absent",
    "absolve", "abstract", "absurd", "abuse", "abyss", "acacia", "academy", "accent",
    "access", "accident", "acclaim", "accord", "account", "accrue", "accuse", "acetone",
    "ache", "acid", "acorn", "acoustic", "acquire", "acre", "acrobat", "across",
    "acrylic", "act", "action", "actor", "actress", "actual", "acumen", "adage",
    "adamant", "adapt", "addendum", "addict", "address", "adept", "adhere", "adjacent",
    "adjourn", "adjust", "admiral", "admire", "admit", "adobe", "adorn", "adrift",
    "adult", "advance", "adverb", "advocate", "aeon", "aerial", "aerobic", "aether",
    "affair", "affix", "afford", "afghan", "afloat", "afoot", "afraid", "afresh",
    "aft", "afterglow", "again", "age", "agenda", "agent", "agile", "aglow",
    "agony", "agree", "aground", "ahead", "ahoy", "aileron", "aim", "air",
    "airport", "aisle", "ajar", "akin", "alarm", "album", "alcohol", "alcove",
    "alder", "alert", "alfalfa", "algae", "alias", "alibi", "alien", "alight",
    "alkali", "all", "alley", "allow", "almanac", "almost", "aloe", "aloft",
    "alone", "alpaca", "alpha", "alpine", "already", "also", "altar", "alter",
    "alto", "alum", "always", "amateur", "amazing", "ambient", "amble", "ambush",
    "amend", "amethyst", "amid", "amigo", "ammonia", "amnesty", "amok", "among",
    "amount", "ampere", "ample", "amulet", "amused", "anagram", "analyst", "anchor",
    "anchovy", "ancient", "anecdote", "anemone", "anew", "angelic", "anger", "angle",
    "angler", "angora", "angry", "anguish", "animal", "anise", "ankle", "announce",
    "annual", "anode", "anorak", "another", "answer", "antenna", "anthem", "anther",
    "anthill", "antic", "antidote", "antique", "antler", "anvil", "anxiety", "aorta",
    "apart", "apex", "aphid", "aplomb", "apology", "apostle", "apparel", "appear",
    "appease", "applaud", "apple", "approve", "apricot", "april", "apron", "apse",
    "aquifer", "arbor", "arcade", "arch", "archer", "archive", "arctic", "ardent",
    "ardor", "area", "arena", "argue", "arid", "ark", "arm", "armada",
    "armoire", "armor", "army", "arnica", "aroma", "around", "arrange", "arrest",
    "arrive", "arrow", "arsenal", "arson", "art", "artefact", "artery", "artisan",
    "artist", "ascot", "ash", "ashen", "ashore", "ask", "askew", "aspect",
    "aspen", "asphalt", "aspic", "assault", "asset", "assist", "assume", "aster",
    "asthma", "astute", "athlete", "atlas", "atoll", "atom", "atrium", "attack",
    "attend", "attic", "attitude", "attract", "auburn", "auction", "audit", "auger",
    "augur", "august", "aura", "aurora", "auspice", "austere", "author", "auto",
    "autumn", "avail", "avalanche", "avenge", "average", "avert", "avian", "aviary",
    "avid", "avocado", "avoid", "aware", "away", "awesome", "awful", "awkward",
    "awning", "axiom", "axis", "axle", "azalea", "azure", "babble", "baboon",
    "baby", "bachelor", "backbone", "backpack", "badge", "badger", "baffle", "bag",
    "bagel", "bagpipe", "bail", "bait", "bake", "balance", "balcony", "bald",
    "bale", "ball", "balm", "balsa", "banana", "banish", "banjo", "banner",
    "banter", "bar", "barb", "barely", "bargain", "barge", "bark", "barley",
    "barn", "barrel", "basalt", "base", "bashful", "basil", "basin", "bask",
    "basket", "bass", "baste", "batch", "bath", "baton", "batten", "battle",
    "bauble", "bawl", "bayou", "bazaar", "beach", "beacon", "beagle", "beak",
    "beam", "bean", "beard", "beauty", "beaver", "because", "beckon", "become",
    "bedlam", "bedrock", "beech", "beef", "beet", "befall", "begin", "behave",
    "behest", "behind", "behold", "beige", "belfry", "believe", "bellow", "below",
    "belt", "bemoan", "bench", "benefit", "berate", "beret", "berth", "besiege",
    "best", "bestow", "betray", "better", "between", "bevel", "beyond", "bezel",
    "bicker", "bicycle", "bid", "bide", "bight", "bike", "bilge", "billow",
    "bind", "biology", "birch", "bird", "birth", "bison", "bistro", "bitter",
    "black", "blackout", "blade", "blame", "bland", "blank", "blanket", "blast",
    "blaze", "bleak", "blend", "bless", "blight", "blimp", "blind", "blink",
    "blip", "bliss", "blister", "blitz", "blizzard", "bloat", "blob", "blood",
    "bloom", "blot", "blouse", "blubber", "blue", "bluff", "blunt", "blur",
    "blurt", "blush", "boar", "board", "boast", "boat", "bobbin", "bobcat",
    "bode", "body", "boggle", "bogus", "boil", "bold", "bolster", "bolt",
    "bomb", "bone", "bonfire", "bongo", "bonnet", "bonus", "book", "boost",
    "booth", "booty", "border", "bore", "boring", "borough", "borrow", "boss",
    "bosun", "botany", "bottom", "bough", "bouillon", "boulder", "bounce", "bout",
    "bovine", "bowl", "box", "bracket", "brain", "bramble", "bran", "brand",
    "brandish", "brash", "brass", "bravado", "brave", "brawn", "bray", "brazen",
    "breach", "bread", "bream", "breeze", "briar", "brick", "bridge", "brief",
    "brigade", "bright", "brim", "brine", "bring", "brink", "brisk", "bristle",
    "brittle", "broach", "brocade", "broccoli", "broken", "bronze", "brook", "broom",
    "broth", "brother", "brown", "brunt", "brush", "brusque", "brute", "bubble",
    "buckle", "bud", "buddy", "budge", "budget", "buffalo", "buffoon", "bugle",
    "build", "bulb", "bulge", "bulk", "bullet", "bullion", "bulwark", "bumble",
    "bundle", "bungalow", "bunker", "bunt", "buoy", "burger", "burlap", "burly",
    "burnish", "burrow", "burst", "bus", "bushel", "business", "bustle", "busy",
    "butte", "butter", "buyer", "buzz", "buzzard", "bygone", "byway", "cabana",
    "cabbage", "caber", "cabin", "cable", "cackle", "cactus", "cadence", "cadet",
    "cage", "cairn", "cake", "calico", "caliper", "call", "callow", "calve",
    "camber", "camel", "cameo", "camera", "camp", "campus", "can", "canal",
    "canary", "cancel", "candid", "candor", "candy", "cane", "canine", "cannery",
    "cannon", "canoe", "canopy", "cantor", "canvas", "canyon", "capable", "caper",
    "capital", "capsize", "capstan", "captain", "car", "caramel", "caravan", "caraway",
    "carbon", "card", "cardinal", "caress", "cargo", "caribou", "carol", "carp",
    "carpet", "carry", "cart", "carve", "cascade", "case", "cash", "cashew",
    "casino", "casket", "caste", "castle", "casual", "cat", "catalog", "catapult",
    "catch", "category", "catfish", "cattle", "caught", "cauldron", "cause", "causeway",
    "caution", "cavern", "cayenne", "cedar", "ceiling", "celery", "cell", "cellar",
    "cement", "census", "century", "cereal", "certain", "chafe", "chaff", "chair",
    "chalet", "chalice", "chamber", "champion", "change", "chant", "chaos", "chapel",
    "chapter", "charcoal", "charge", "chariot", "charm", "chart", "chase", "chasm",
    "chassis", "chaste", "chat", "cheap", "check", "cheddar", "cheese", "cheetah",
    "chef", "cherish", "cherry", "chest", "chestnut", "chevron", "chicken", "chide",
    "chief", "child", "chime", "chirp", "chisel", "chive", "choice", "choose",
    "chord", "chowder", "chrome", "chronic", "chuckle", "chunk", "churn", "chute",
    "cider", "cigar", "cinder", "cinnamon", "circle", "cistern", "citadel", "cite",
    "citizen", "citrus", "city", "civil", "clad", "claim", "clamber", "clamor",
    "clang", "clank", "clap", "clarify", "clasp", "claw", "clay", "clean",
    "cleave", "cleft", "clemency", "clench", "clergy", "cleric", "clerk", "clever",
    "click", "client", "cliff", "climb", "clinch", "clinic", "clip", "cloak",
    "clock", "clod", "clog", "close", "clot", "cloth", "cloud", "clove",
    "clover", "clown", "club", "clump", "cluster", "clutch", "coach", "coal",
    "coarse", "coast", "coax", "cobalt", "cobble", "cobra", "cocoa", "coconut",
    "coddle", "code", "codger", "coffee", "cog", "cohere", "coil", "colander",
    "collect", "collie", "color", "colt", "column", "combine", "come", "comet",
    "comfort", "comic", "commend", "common", "commune", "company", "compass", "concert",
    "conch", "concur", "condone", "conduct", "conduit", "cone", "confetti", "confirm",
    "congress", "conifer", "connect", "consider", "consul", "contour", "control", "convince",
    "cool", "cope", "copper", "copse", "copy", "coral", "cord", "cordial",
    "core", "cork", "cormorant", "corn", "cornice", "corral", "correct", "corridor",
    "cosmic", "cottage", "cotton", "couch", "cougar", "coulee", "countess", "country",
    "couple", "courier", "course", "cousin", "cove", "coven", "cover", "cowl",
    "coy", "cozy", "crack", "cradle", "craft", "crag", "cram", "cramp",
    "cranberry", "crane", "crash", "crater", "cravat", "crave", "crawl", "crayon",
    "crazy", "creak", "credit", "credo", "creed", "creek", "crescent", "crest",
    "crevice", "crew", "cricket", "crime", "crimson", "cringe", "crisp", "critic",
    "croak", "crochet", "croft", "crone", "crony", "crook", "croon", "crop",
    "cross", "crouch", "crow", "crowd", "crucial", "crucible", "cruel", "cruet",
    "cruise", "crumb", "crumble", "crusade", "crush", "crux", "cry", "crypt",
    "crystal", "cub", "cube", "cubit", "cuckoo", "cudgel", "cuff", "culture",
    "culvert", "cumin", "cup", "cupboard", "curb", "curfew", "curio", "curious",
    "curl", "currant", "current", "curt", "curtail", "curtain", "curve", "cushion",
    "cusp", "custom", "cute", "cutlass", "cypress", "dabble", "dad", "dainty",
    "dairy", "daisy", "dale", "dally", "damage", "damp", "dance", "dandelion",
    "danger", "dapper", "dapple", "daring", "dart", "date", "daub", "daughter",
    "daunt", "dawdle", "dawn", "day", "daybreak", "deacon", "deal", "dearth",
    "debate", "debonair", "debris", "debut", "decade", "decanter", "decide", "decline",
    "decorate", "decoy", "decrease", "decree", "deer", "defense", "define", "deft",
    "defy", "degree", "delay", "deliver", "dell", "delta", "demand", "demise",
    "demure", "den", "denial", "denim", "dent", "dentist", "deny", "depart",
    "depend", "deposit", "depot", "depth", "deputy", "derby", "derelict", "describe",
    "desert", "design", "desk", "despair", "destroy", "detail", "detect", "develop",
    "device", "devote", "dew", "dhow", "diadem", "diagram", "dial", "diamond",
    "dice", "diesel", "diet", "differ", "digital", "dignity", "dilemma", "dill",
    "dimple", "dinghy", "dingo", "dinner", "dinosaur", "direct", "dirge", "dirt",
    "discover", "disease", "dish", "dismiss", "disorder", "display", "distance", "ditty",
    "divert", "divide", "divorce", "divot", "dizzy", "docile", "dock", "doctor",
    "document", "dog", "dogma", "doldrums", "dole", "doll", "dollop", "dolphin",
    "domain", "dome", "donate", "donkey", "donor", "doodle", "door", "dormant",
    "dose", "dote", "dour", "dove", "dowel", "down", "dowry", "doze",
    "drab", "drachma", "draft", "dragon", "drake", "dram", "drama", "drastic",
    "draw", "drawl", "dream", "dredge", "dregs", "drench", "dress", "drift",
    "drill", "drink", "drip", "drive", "drizzle", "droll", "drone", "droop",
    "drop", "dross", "drought", "drub", "drudge", "drum", "dry", "dryad",
    "dubious", "duchess", "duck", "duct", "dud", "dugout", "duke", "dulcet",
    "dumb", "dune", "dungeon", "during", "dust", "dutch", "duty", "dwarf",
    "dwell", "dye", "dynamic", "dynamo", "eager", "eagle", "earl", "early",
    "earn", "earnest", "earth", "earthen", "easily", "east", "easy", "eave",
    "ebb", "ebony", "echo", "eclair", "ecology", "economy", "eddy", "edge",
    "edgewise", "edict", "edit", "educate", "eel", "effigy", "effort", "egg",
    "egret", "eider", "eiderdown", "eight", "either", "elan", "elate", "elbow",
    "elder", "electric", "elegant", "element", "elephant", "elevator", "elite", "elixir",
    "elk", "ellipse", "elm", "elope", "eloquent", "else", "elude", "embark",
    "ember", "emblem", "embody", "emboss", "embrace", "emcee", "emir", "emotion",
    "empathy", "employ", "emporium", "empower", "empty", "emu", "enable", "enact",
    "enamel", "enclave", "encore", "end", "endear", "endless", "endorse", "enemy",
    "energy", "enforce", "engage", "engine", "enhance", "enigma", "enjoy", "enlist",
    "enmity", "ennui", "enough", "enrich", "enroll", "ensign", "ensure", "entire",
    "entry", "entwine", "envelope", "envoy", "eon", "epaulet", "epic", "episode",
    "epoch", "equal", "equinox", "equip", "era", "erase", "ermine", "erode",
    "errand", "error", "erstwhile", "erupt", "escape", "eschew", "espalier", "esplanade",
    "essay", "essence", "estate", "estuary", "etch", "eternal", "ether", "ethics",
    "ethos", "evidence", "evil", "evoke", "evolve", "ewe", "ewer", "exact",
    "exalt", "example", "excerpt", "excess", "exchange", "excite", "exclude", "excuse",
    "execute", "exhale", "exhaust", "exhibit", "exile", "exist", "exit", "exodus",
    "exotic", "expand", "expanse", "expect", "expire", "explain", "expose", "express",
    "extend", "extol", "exult", "eye", "eyebrow", "eyelet", "eyrie", "fable",
    "fabric", "facade", "face", "facet", "faculty", "fad", "fade", "fain",
    "faint", "fairway", "faith", "fallow", "false", "falter", "fame", "family",
    "famish", "famous", "fan", "fancy", "fang", "fantasy", "farce", "farm",
    "fashion", "fat", "fatal", "fathom", "fatigue", "fault", "favorite", "fawn",
    "fealty", "feast", "feather", "feature", "february", "feckless", "federal", "fedora",
    "fee", "feed", "feel", "feign", "feline", "fell", "felt", "female",
    "fen", "fence", "fennel", "fern", "ferret", "ferry", "fervor", "fester",
    "festival", "fetch", "fete", "feud", "fever", "fez", "fiasco", "fib",
    "fiber", "fickle", "fiction", "fiddle", "fidget", "fief", "field", "fife",
    "fig", "figure", "filament", "filbert", "file", "film", "filter", "fin",
    "final", "finch", "find", "fine", "finesse", "finger", "finish", "fir",
    "fire", "firm", "first", "firth", "fiscal", "fish", "fit", "fitness",
    "fix", "fjord", "flag", "flagon", "flair", "flak", "flame", "flange",
    "flank", "flannel", "flap", "flash", "flask", "flat", "flaunt", "flax",
    "fleck", "fledge", "flee", "fleece", "flick", "flight", "flinch", "fling",
    "flint", "flip", "flippant", "flit", "float", "flock", "floe", "floor",
    "floss", "flounder", "flower", "flue", "fluid", "fluke", "flume", "flurry",
    "flush", "flute", "flux", "fly", "foal", "foam", "fob", "focus",
    "fog", "foible", "foil", "foist", "fold", "follow", "folly", "fond",
    "font", "food", "foot", "forage", "foray", "force", "ford", "forest",
    "forge", "fork", "fort", "fortnight", "fortune", "forum", "forward", "fossil",
    "foster", "found", "foundry", "fowl", "fox", "fracas", "fragile", "frail",
    "frame", "freckle", "frequent", "fresco", "fresh", "fret", "friar", "friend",
    "frigate", "frill", "fringe", "frisk", "frock", "frog", "frond", "front",
    "frost", "frown", "frugal", "fruit", "fuel", "fumble", "fun", "funnel",
    "funny", "furl", "furlong", "furnace", "furrow", "fury", "fuse", "fussy",
    "future", "gab", "gabbro", "gadfly", "gadget", "gaff", "gaggle", "gain",
    "gait", "gala", "galaxy", "gale", "gall", "galleon", "gallery", "gallop",
    "galore", "gambit", "game", "gannet", "gantry", "gap", "garage", "garb",
    "garbage", "garden", "garland", "garlic", "garment", "garnet", "garnish", "garret",
    "gas", "gash", "gasket", "gasp", "gather", "gauge", "gaunt", "gauze",
    "gavel", "gawk", "gaze", "gazebo", "gazelle", "gecko", "general", "genius",
    "genre", "gentle", "genuine", "geode", "geyser", "ghost", "ghoul", "giant",
    "giddy", "gift", "giggle", "gild", "gill", "gimlet", "gin", "ginger",
    "gingham", "giraffe", "girder", "girl", "girth", "give", "glad", "glade",
    "glance", "glare", "glass", "glean", "glen", "glib", "glide", "glimmer",
    "glimpse", "glint", "glisten", "gloam", "gloat", "glob", "gloom", "glory",
    "glove", "glow", "glower", "glue", "glut", "glyph", "gnarl", "gnash",
    "gnat", "gnome", "goad", "goat", "gobble", "goblet", "goddess", "gold",
    "golem", "gondola", "gong", "good", "goose", "gore", "gorge", "gorilla",
    "gorse", "gosling", "gospel", "gossamer", "gossip", "gouge", "gourd", "govern",
    "gown", "grab", "grace", "grackle", "graft", "grail", "grain", "granary",
    "granite", "grant", "grape", "grapple", "grass", "grate", "gravel", "gravity",
    "graze", "great", "green", "greet", "gremlin", "grenade", "grid", "griddle",
    "grief", "grime", "grist", "grit", "groan", "grocery", "groin", "grommet",
    "grope", "grotto", "group", "grouse", "grove", "grow", "growl", "grub",
    "grudge", "gruel", "gruff", "grunt", "guard", "guess", "guide", "guild",
    "guile", "guitar", "gulch", "gull", "gully", "gumbo", "gun", "gunwale",
    "gush", "gusset", "gust", "gutter", "gym", "haberdash", "habit", "hackle",
    "haddock", "haggard", "hail", "hair", "hake", "hale", "half", "halibut",
    "hallow", "halter", "halve", "hamlet", "hammer", "hamper", "hamster", "hand",
    "hank", "hanker", "happy", "harbinger", "harbor", "hard", "hark", "harp",
    "harrow", "harsh", "hart", "harvest", "hassock", "haste", "hat", "hatch",
    "haughty", "haul", "haunch", "haven", "havoc", "hawk", "hawthorn", "hazard",
    "hazel", "head", "health", "heart", "heath", "heather", "heavy", "hedge",
    "hedgehog", "heed", "heft", "heifer", "heirloom", "hello", "helm", "helmet",
    "help", "hem", "hemlock", "hemp", "hen", "henna", "herald", "herb",
    "herd", "hermit", "hero", "heron", "hexagon", "heyday", "hickory", "hidden",
    "hide", "high", "hill", "hilt", "hind", "hinge", "hint", "hip",
    "hire", "history", "hitch", "hive", "hoard", "hobble", "hobby", "hock",
    "hockey", "hod", "hoe", "hogan", "hoist", "hold", "hole", "holiday",
    "hollow", "holly", "homage", "home", "hone", "honey", "hood", "hoof",
    "hope", "hopscotch", "horde", "horizon", "horn", "hornet", "horror", "horse",
    "hosiery", "hospital", "host", "hotel", "hound", "hour", "hover", "hub",
    "hubris", "huddle", "hue", "huff", "huge", "hulk", "hull", "human",
    "humble", "humor", "hundred", "hungry", "hunt", "hurdle", "hurry", "husband",
    "hush", "husk", "hutch", "hybrid", "hydrant", "hymn", "ibex", "ibis",
    "ice", "icicle", "icon", "idea", "identify", "idle", "idol", "idyll",
    "ignore", "ilk", "ill", "illegal", "illness", "image", "imbue", "imitate",
    "immense", "immune", "imp", "impact", "impale", "impart", "impasse", "impel",
    "impish", "implore", "impose", "improve", "impulse", "inane", "incense", "inch",
    "include", "income", "increase", "index", "indicate", "indigo", "indoor", "industry",
    "infant", "inflict", "inform", "infuse", "ingot", "inhale", "inherit", "initial",
    "inject", "injury", "inkling", "inlay", "inlet", "inmate", "inmost", "innate",
    "inner", "input", "inquiry", "inroad", "insane", "insect", "inside", "insole",
    "inspire", "install", "instill", "intact", "inter", "interest", "into", "invest",
    "invite", "involve", "iota", "irate", "iris", "iron", "irons", "island",
    "isle", "islet", "isolate", "issue", "item", "ivory", "jab", "jackal",
    "jackdaw", "jacket", "jade", "jaguar", "jamb", "jangle", "jape", "jar",
    "jargon", "jasmine", "jasper", "jaunt", "javelin", "jawbone", "jay", "jazz",
    "jealous", "jeans", "jelly", "jerkin", "jest", "jetty", "jewel", "jib",
    "jiffy", "jig", "jilt", "jinx", "job", "jocund", "join", "joke",
    "jolt", "jostle", "jot", "journey", "joy", "jubilee", "judge", "jugular",
    "juice", "jumble", "jump", "junco", "jungle", "junior", "juniper", "junk",
    "junket", "just", "jute", "kale", "kangaroo", "kazoo", "kedge", "keel",
    "keen", "keep", "keg", "kelp", "ken", "kennel", "kern", "kestrel",
    "ketch", "ketchup", "kettle", "key", "khaki", "kid", "kidney", "kiln",
    "kilt", "kimono", "kin", "kind", "kindle", "kindred", "kingdom", "kink",
    "kiosk", "kipper", "kiss", "kit", "kitchen", "kite", "kitten", "kiwi",
    "knack", "knave", "knead", "knee", "knell", "knife", "knock", "knoll",
    "knot", "know", "kudos", "lab", "label", "labor", "labyrinth", "ladder",
    "lade", "ladle", "lady", "lagoon", "lair", "lake", "lame", "lamp",
    "lance", "language", "lanky", "lantern", "lapel", "lapse", "laptop", "lard",
    "large", "lark", "larkspur", "lash", "lass", "latch", "later", "lathe",
    "latin", "lattice", "laud", "laugh", "laundry", "laurel", "lava", "lave",
    "lawn", "lawsuit", "lax", "layer", "lazy", "leaden", "leader", "leaf",
    "learn", "leave", "leaven", "lecture", "ledge", "leer", "leeway", "left",
    "leg", "legend", "legume", "leisure", "lemon", "lemur", "lend", "length",
    "lens", "lentil", "leopard", "lesson", "lest", "letter", "levee", "level",
    "lever", "liar", "liberty", "library", "license", "lichen", "lien", "life",
    "lift", "light", "like", "lilac", "lilt", "limb", "lime", "limit",
    "limpet", "linden", "linger", "link", "lintel", "lion", "liquid", "lisle",
    "lisp", "list", "listless", "lithe", "litmus", "little", "live", "livid",
    "lizard", "llama", "loach", "loam", "loan", "loath", "lob", "lobe",
    "lobster", "local", "lock", "locket", "locust", "lode", "lodge", "loft",
    "logic", "loll", "lonely", "loom", "loon", "loop", "lope", "lore",
    "lottery", "loud", "lounge", "lout", "louver", "love", "lowland", "loyal",
    "lozenge", "lucid", "lucky", "lug", "lull", "lumber", "luminous", "lunar",
    "lunch", "lunge", "lupine", "lurch", "lure", "lurk", "lush", "lute",
    "luxury", "lye", "lynx", "lyre", "lyrics", "machine", "mackerel", "mad",
    "madcap", "madrigal", "maelstrom", "magenta", "magic", "magnate", "magnet", "magpie",
    "mahogany", "maid", "mail", "main", "maize", "make", "malachite", "mallard",
    "mallet", "malt", "mammal", "man", "manage", "mandate", "mandolin", "mane",
    "mangle", "mango", "mangrove", "manifold", "manor", "mansion", "mantle", "manual",
    "maple", "marauder", "marble", "march", "mare", "margin", "marigold", "marina",
    "marine", "mariner", "market", "marmot", "maroon", "marriage", "marrow", "marten",
    "martin", "marvel", "mask", "mason", "mass", "mast", "master", "mastiff",
    "match", "material", "math", "matrix", "matron", "matter", "maul", "maven",
    "maverick", "maw", "maximum", "maze", "meadow", "mean", "meander", "measure",
    "meat", "mechanic", "medal", "media", "medley", "meek", "meld", "mellow",
    "melon", "melt", "member", "memory", "menace", "mend", "mention", "mentor",
    "menu", "mercer", "mercy", "mere", "merge", "merit", "merry", "mesa",
    "message", "metal", "mete", "method", "mettle", "mews", "mica", "middle",
    "midge", "midnight", "midst", "mien", "mild", "mildew", "milk", "milkweed",
    "mill", "million", "mimic", "mince", "mind", "mingle", "minimum", "minnow",
    "minor", "minstrel", "mint", "minuet", "minute", "miracle", "mirage", "mire",
    "mirror", "mirth", "misery", "miss", "mistake", "mite", "mitten", "mix",
    "mixed", "mixture", "moat", "mobile", "mocha", "mode", "model", "modify",
    "molar", "mold", "molten", "mom", "moment", "monarch", "mongoose", "monitor",
    "monkey", "monsoon", "monster", "month", "moon", "moor", "moose", "mop",
    "moraine", "moral", "morass", "morning", "mortar", "mosaic", "mosquito", "moss",
    "mote", "mother", "motion", "motley", "motor", "mottle", "mound", "mountain",
    "mourn", "mouse", "mouser", "move", "mow", "much", "muddle", "muff",
    "muffin", "mug", "mulberry", "mulch", "mule", "mull", "multiply", "mumble",
    "mural", "murk", "muscle", "muse", "mushroom", "music", "musk", "muslin",
    "mussel", "must", "mustang", "muster", "musty", "mute", "mutter", "mutual",
    "muzzle", "myriad", "myrtle", "myself", "mystery", "nab", "nadir", "nag",
    "naive", "name", "nape", "napkin", "narrate", "narrow", "nasty", "nation",
    "nature", "nautical", "nave", "navel", "neap", "near", "nectar", "need",
    "needle", "negative", "neglect", "neigh", "neither", "nephew", "nerve", "nest",
    "net", "nettle", "network", "neutral", "never", "newel", "newt", "next",
    "nib", "nibble", "nice", "niche", "nick", "night", "nimble", "nimbus",
    "nip", "nixie", "nob", "noble", "nocturne", "nod", "node", "nomad",
    "nominee", "nonce", "noodle", "nook", "noose", "normal", "north", "nose",
    "notable", "notch", "note", "nothing", "notice", "nougat", "nourish", "nova",
    "novice", "now", "nozzle", "nub", "nuclear", "nugget", "number", "nurse",
    "nut", "nuzzle", "nymph", "oak", "oaken", "oakum", "oar", "oasis",
    "oath", "obelisk", "obey", "object", "oblige", "oboe", "obscure", "observe",
    "obtain", "obvious", "occur", "ocean", "ocher", "octave", "october", "ocular",
    "odor", "off", "offer", "office", "often", "ogle", "ogre", "oil",
    "oilskin", "ointment", "okay", "old", "olden", "oleander", "olive", "olympic",
    "omen", "omit", "one", "onion", "online", "only", "onset", "onyx",
    "ooze", "opal", "open", "opera", "opine", "opinion", "opossum", "oppose",
    "option", "oracle", "orator", "orb", "orbit", "orchard", "orchid", "ordain",
    "order", "ordinary", "organ", "orient", "original", "oriole", "ornate", "orphan",
    "osier", "osprey", "ostrich", "otter", "ounce", "outcrop", "outdoor", "outer",
    "output", "outset", "outside", "ova", "oval", "oven", "over", "overt",
    "owlet", "own", "owner", "oxbow", "oxygen", "oyster", "ozone", "pact",
    "paddle", "paddock", "padlock", "page", "pagoda", "pail", "painter", "pair",
    "palace", "palate", "paling", "pallet", "palm", "palomino", "pampas", "panache",
    "panda", "pander", "pane", "panel", "pang", "panic", "pannier", "panoply",
    "pansy", "panther", "pantry", "paper", "papyrus", "parade", "parapet", "parcel",
    "parchment", "pare", "parent", "park", "parlance", "parley", "parlor", "parquet",
    "parrot", "parsley", "parson", "partridge", "party", "passel", "pastel", "pastern",
    "pasture", "patch", "path", "patient", "patina", "patio", "patrol", "patter",
    "pattern", "pauper", "pause", "pave", "pavilion", "pawn", "peace", "peal",
    "peanut", "pear", "peasant", "peat", "pebble", "peck", "pectin", "peddle",
    "pedestal", "peel", "peer", "pelican", "pelt", "pen", "penalty", "pend",
    "pendant", "pennant", "pensive", "peony", "people", "pepper", "perch", "perennial",
    "perfect", "pergola", "peril", "periwig", "perk", "permeate", "permit", "pert",
    "perturb", "peruse", "pester", "pestle", "pet", "petal", "petrel", "pewter",
    "phalanx", "phantom", "pheasant", "phial", "phlox", "phone", "photo", "phrase",
    "piano", "pickle", "picnic", "picture", "piddle", "piebald", "piece", "pier",
    "pig", "pigeon", "pigment", "pike", "pilfer", "pill", "pillar", "pilot",
    "pimpernel", "pince", "pinion", "pink", "pinnacle", "pint", "pinto", "pioneer",
    "pip", "pipe", "pipette", "pique", "pistol", "pitch", "pith", "pivot",
    "pizza", "place", "placid", "plaid", "plait", "planet", "plank", "plaque",
    "plastic", "plate", "plateau", "platen", "platter", "play", "please", "pleat",
    "pledge", "plinth", "plop", "plover", "ploy", "pluck", "plug", "plum",
    "plumb", "plume", "plummet", "plump", "plunder", "plunge", "plush", "ply",
    "poach", "pod", "poem", "point", "poise", "poker", "polar", "pole",
    "polecat", "police", "pollen", "pommel", "pond", "ponder", "pony", "pool",
    "popular", "porch", "pore", "portal", "portent", "portico", "portion", "position",
    "posse", "possible", "post", "posy", "potato", "potion", "pottery", "pouch",
    "poultice", "pounce", "pout", "poverty", "power", "practice", "praise", "praline",
    "prance", "prank", "prattle", "predict", "preen", "prefer", "premise", "prepare",
    "presage", "present", "pretty", "prevent", "price", "prim", "primary", "primer",
    "primrose", "print", "priority", "prison", "private", "prize", "problem", "process",
    "produce", "profit", "program", "project", "promote", "proof", "property", "prosper",
    "protect", "proud", "provide", "prow", "prowess", "prude", "prune", "pry",
    "psalm", "public", "puck", "pucker", "pudding", "puddle", "pull", "pulley",
    "pulp", "pulpit", "pulse", "pumice", "pummel", "pumpkin", "pun", "punch",
    "punt", "puny", "pupil", "puppy", "purchase", "purity", "purl", "purpose",
    "purr", "purse", "push", "put", "putty", "puzzle", "pyramid", "pyre",
    "quaff", "quagmire", "quail", "quaint", "quake", "quality", "qualm", "quarry",
    "quarter", "quartz", "quash", "quaver", "quay", "queasy", "quell", "quench",
    "question", "quibble", "quick", "quill", "quilt", "quince", "quinine", "quip",
    "quit", "quiver", "quiz", "quoin", "quoit", "quota", "quote", "quoth",
    "rabbit", "rabble", "raccoon", "race", "raceme", "rack", "radar", "radio",
    "radish", "raft", "rafter", "rail", "rain", "raise", "rake", "rakish",
    "rally", "ramble", "ramp", "rampart", "ramrod", "ranch", "rancor", "random",
    "range", "ransack", "ransom", "rant", "rapid", "rapt", "rare", "rascal",
    "rasp", "raspy", "rate", "rather", "rattan", "ravel", "raven", "ravine",
    "raw", "rawhide", "razor", "razz", "ready", "real", "ream", "reap",
    "reason", "rebel", "rebuff", "rebuild", "rebuke", "recall", "recant", "recede",
    "receive", "recipe", "recoil", "record", "recycle", "redoubt", "reduce", "redwood",
    "reed", "reef", "reel", "reflect", "reform", "refuse", "regal", "regale",
    "region", "regret", "regular", "reject", "relax", "release", "relent", "relic",
    "relief", "relish", "rely", "remain", "remember", "remind", "remit", "remnant",
    "remove", "rend", "render", "renege", "rent", "reopen", "repair", "repast",
    "repeat", "replace", "report", "repose", "reprise", "require", "rescue", "resemble",
    "resin", "resist", "resource", "response", "retire", "retort", "retreat", "return",
    "reunion", "reveal", "revel", "revere", "review", "reward", "rhubarb", "rhyme",
    "rhythm", "rib", "ribbon", "rice", "rich", "ride", "ridge", "rifle",
    "rift", "rig", "right", "rigid", "rile", "rill", "rime", "rind",
    "ring", "ringlet", "riot", "ripen", "ripple", "rippling", "ritual", "rival",
    "rive", "river", "rivet", "road", "roan", "roast", "robin", "robot",
    "robust", "rock", "rocket", "roe", "roil", "romance", "rondo", "roof",
    "rook", "rookie", "room", "roost", "rose", "rosin", "rotate", "rote",
    "rotund", "rough", "round", "rouse", "rout", "route", "rove", "royal",
    "rubber", "rubble", "rudder", "rude", "rue", "ruffian", "ruffle", "rug",
    "rugged", "rule", "rummage", "rump", "run", "rune", "rung", "runnel",
    "rural", "ruse", "rusk", "russet", "rustic", "rut", "saber", "sable",
    "sad", "saddle", "sadness", "safe", "saga", "sage", "sago", "sail",
    "saline", "sallow", "salmon", "salon", "salt", "salute", "salve", "same",
    "samovar", "sampan", "sample", "sand", "sandal", "sapling", "sash", "sassafras",
    "satchel", "satin", "satisfy", "satoshi", "sauce", "saunter", "sausage", "save",
    "savor", "savory", "sawdust", "say", "scabbard", "scad", "scald", "scale",
    "scallop", "scamp", "scanty", "scare", "scarp", "scathe", "scatter", "scene",
    "scepter", "scheme", "school", "schooner", "science", "scion", "scissors", "scoff",
    "scone", "scorch", "scour", "scout", "scowl", "scrag", "scrap", "scrawl",
    "scree", "screech", "screen", "scribe", "scrimp", "script", "scroll", "scrub",
    "scud", "scuff", "scull", "scurry", "scuttle", "scythe", "sea", "seam",
    "sear", "search", "season", "seat", "second", "secret", "section", "security",
    "sedge", "seed", "seek", "seep", "segment", "seine", "select", "sell",
    "seminar", "senior", "sense", "sentence", "sepia", "sequin", "serenade", "serene",
    "serf", "serge", "series", "serrate", "session", "settle", "setup", "seven",
    "sever", "sew", "shadow", "shaft", "shale", "shallot", "shallow", "shamble",
    "shank", "shard", "share", "sheaf", "shear", "sheen", "shell", "shepherd",
    "sheriff", "shield", "shift", "shimmer", "shin", "shine", "shingle", "ship",
    "shire", "shirk", "shiver", "shoal", "shock", "shod", "shone", "shoo",
    "shoot", "shop", "shorn", "short", "shoulder", "shove", "shrew", "shrike",
    "shrimp", "shrub", "shrug", "shuck", "shuffle", "shun", "shutter", "shy",
    "sibling", "sick", "sickle", "side", "sidle", "siege", "sienna", "sieve",
    "sift", "sight", "sign", "silage", "silent", "silk", "silly", "silver",
    "similar", "simple", "since", "sinew", "sing", "singe", "sire", "siren",
    "sirocco", "sisal", "sister", "situate", "six", "size", "skate", "sketch",
    "skewer", "ski", "skiff", "skill", "skimp", "skin", "skirmish", "skirt",
    "skit", "skulk", "skull", "slab", "slake", "slam", "slat", "slate",
    "sleet", "sleigh", "slender", "slice", "slide", "slight", "slim", "slither",
    "sliver", "slogan", "sloop", "slosh", "slot", "slough", "slow", "slur",
    "slush", "smart", "smelt", "smile", "smite", "smock", "smoke", "smolder",
    "smooth", "smudge", "snack", "snag", "snake", "snap", "snare", "snarl",
    "sneer", "snip", "snipe", "snood", "snorkel", "snout", "snow", "snub",
    "snuff", "soap", "soapstone", "soar", "soccer", "social", "sock", "socket",
    "sod", "soda", "soft", "soggy", "sojourn", "solace", "solar", "solder",
    "soldier", "sole", "solid", "solstice", "solution", "solve", "somber", "someone",
    "song", "sonnet", "soon", "sop", "sorghum", "sorrel", "sorry", "sort",
    "sough", "soul", "sound", "soup", "source", "south", "sow", "space",
    "spangle", "spar", "spare", "spat", "spate", "spatial", "spawn", "speak",
    "special", "speck", "speed", "spell", "spelt", "spend", "sphere", "spice",
    "spider", "spigot", "spike", "spin", "spinet", "spire", "spirit", "spleen",
    "splice", "split", "spoil", "spoke", "sponsor", "spool", "spoon", "spore",
    "sport", "spot", "spray", "spread", "sprig", "sprocket", "spruce", "spume",
    "spurn", "sputter", "spy", "squab", "squall", "squander", "square", "squat",
    "squeeze", "squint", "squirrel", "stable", "stack", "staff", "stage", "staid",
    "stairs", "stalwart", "stamen", "stamp", "stanchion", "stand", "stanza", "starboard",
    "starch", "stark", "start", "state", "statuary", "staunch", "stay", "stead",
    "steak", "steed", "steel", "steep", "stem", "step", "steppe", "stereo",
    "stern", "stick", "stile", "still", "stilt", "sting", "stint", "stock",
    "stoke", "stole", "stolid", "stomach", "stone", "stool", "stoop", "stork",
    "story", "stout", "stove", "stow", "strand", "strap", "strategy", "straw",
    "streak", "street", "strew", "stride", "strife", "strike", "strong", "struggle",
    "strut", "stub", "stucco", "stud", "student", "stuff", "stumble", "stump",
    "sturgeon", "sty", "style", "suave", "subject", "sublime", "submit", "subway",
    "success", "such", "sudden", "suet", "suffer", "sugar", "suggest", "suit",
    "sulk", "sultry", "sumac", "summer", "sun", "sunder", "sundial", "sundry",
    "sunny", "sunset", "super", "supply", "supreme", "sure", "surface", "surge",
    "surly", "surrey", "surround", "survey", "suspect", "sustain", "swab", "swaddle",
    "swag", "swale", "swallow", "swamp", "swan", "swap", "swarm", "swath",
    "sway", "swear", "swelter", "swift", "swill", "swim", "swine", "swing",
    "swirl", "switch", "swoon", "swoop", "sword", "sycamore", "syllable", "sylvan",
    "symbol", "symptom", "syrup", "tabby", "table", "tableau", "tacit", "tackle",
    "taffeta", "taffy", "tag", "tail", "talc", "talent", "talk", "talon",
    "tamarind", "tambour", "tandem", "tangle", "tank", "tankard", "tansy", "tape",
    "taper", "tapir", "tare", "target", "tarn", "tarpaulin", "tarry", "tart",
    "task", "tassel", "taste", "tattoo", "tawny", "taxi", "teach", "teak",
    "teal", "tealeaf", "team", "teem", "tell", "temper", "tempest", "ten",
    "tenant", "tendril", "tenet", "tennis", "tenor", "tent", "tepid", "term",
    "terrace", "terrapin", "terse", "test", "tether", "text", "thank", "that",
    "thatch", "thaw", "theme", "then", "theory", "they", "thicket", "thimble",
    "thine", "thing", "this", "thistle", "thong", "thorn", "thought", "three",
    "thresh", "thrift", "thrive", "throng", "throw", "thrush", "thumb", "thump",
    "thunder", "thwart", "thyme", "tiara", "ticket", "tidal", "tide", "tiger",
    "tiller", "tilt", "timber", "time", "tinder", "tine", "tinker", "tint",
    "tiny", "tip", "tired", "tissue", "tithe", "title", "toad", "toast",
    "tobacco", "today", "toddle", "toddler", "toe", "toffee", "together", "toilet",
    "token", "tole", "toll", "tomato", "tome", "tomorrow", "tone", "tong",
    "tongue", "tonic", "tonight", "tool", "tooth", "top", "topaz", "topic",
    "tor", "torch", "tornado", "torrent", "torrid", "tortoise", "toss", "tot",
    "total", "tote", "totem", "tourist", "tourney", "tousle", "tow", "toward",
    "town", "towpath", "toy", "trace", "track", "tract", "trade", "traffic",
    "tragic", "train", "tram", "trammel", "trance", "transfer", "trap", "trash",
    "travel", "tray", "treacle", "tread", "treat", "treble", "tree", "trek",
    "trellis", "tremor", "trench", "trend", "tress", "trestle", "trial", "tribe",
    "trice", "trick", "trill", "trim", "trinket", "trip", "tripe", "trite",
    "troll", "trophy", "trouble", "trough", "trounce", "troupe", "trout", "trove",
    "trowel", "truce", "trudge", "true", "truly", "trumpet", "truss", "trust",
    "truth", "try", "tryst", "tube", "tuber", "tuft", "tug", "tuition",
    "tulle", "tumble", "tuna", "tunnel", "tureen", "turf", "turkey", "turn",
    "turnpike", "turret", "turtle", "tusk", "tussle", "tutor", "twang", "tweak",
    "tweed", "twelve", "twenty", "twice", "twin", "twine", "twirl", "twist",
    "two", "type", "typical", "udder", "ugly", "ulna", "umber", "umbrella",
    "umpire", "unable", "unaware", "uncanny", "uncouth", "uncover", "unction", "under",
    "undergrowth", "undertow", "undo", "undulate", "unfair", "unfold", "unfurl", "unhappy",
    "uniform", "unique", "unit", "universe", "unkempt", "unlock", "until", "untold",
    "unusual", "unveil", "update", "upgrade", "uphold", "upland", "upon", "upper",
    "uproar", "upset", "upshot", "urban", "urchin", "urge", "usage", "use",
    "used", "useful", "useless", "usher", "usual", "utility", "utmost", "utter",
    "vacant", "vacuum", "vagabond", "vague", "vale", "valet", "valley", "valor",
    "valve", "van", "vane", "vanish", "vanquish", "vantage", "vapor", "various",
    "varmint", "varnish", "vast", "vat", "vault", "vaunt", "veal", "vehicle",
    "vellum", "velour", "velvet", "vendor", "venison", "vent", "venture", "venue",
    "verb", "verdant", "verge", "verify", "version", "verve", "very", "vessel",
    "veteran", "vex", "viable", "vial", "viand", "vibrant", "vicar", "vicious",
    "victory", "video", "vie", "view", "vigil", "vile", "village", "vim",
    "vinegar", "vintage", "vintner", "viol", "viola", "violet", "violin", "vireo",
    "virtual", "virus", "visa", "visage", "visit", "vista", "visual", "vital",
    "vivid", "vocal", "voice", "void", "volcano", "vole", "volley", "volume",
    "vortex", "vote", "votive", "vouch", "vow", "voyage", "vying", "wade",
    "wafer", "wag", "wage", "wagon", "wagtail", "waif", "wail", "wainscot",
    "wait", "waive", "wale", "walk", "wall", "wallow", "walnut", "wane",
    "want", "wanton", "ward", "warden", "ware", "warfare", "warm", "warp",
    "warrior", "wart", "wary", "wash", "wasp", "waste", "water", "wattle",
    "wave", "way", "waylay", "weal", "weald", "wealth", "wean", "weapon",
    "wear", "weasel", "weather", "weave", "web", "wedding", "wedge", "weekend",
    "weevil", "weir", "weird", "weld", "welt", "wend", "west", "wet",
    "whale", "wharf", "what", "wheat", "wheel", "whelk", "whelp", "when",
    "where", "whet", "whiff", "whim", "whip", "whir", "whisk", "whisper",
    "whittle", "whorl", "wick", "wicker", "wicket", "wide", "widget", "width",
    "wield", "wife", "wild", "wile", "will", "wilt", "wily", "wimple",
    "win", "wince", "winch", "windlass", "window", "windrow", "wine", "wing",
    "wink", "winner", "winnow", "winsome", "winter", "wisdom", "wise", "wish",
    "wisp", "wistful", "wither", "witness", "wold", "wolf", "woman", "womble",
    "wonder", "wont", "wood", "woodbine", "woodruff", "wool", "work", "world",
    "worry", "wort", "worth", "wraith", "wrangle", "wrap", "wrath", "wreak",
    "wreath", "wreck", "wren", "wrest", "wrestle", "wrist", "write", "wrong",
    "wrought", "wry", "yacht", "yard", "yarrow", "yaw", "yawl", "year",
    "yearling", "yearn", "yeast", "yellow", "yelp", "yeoman", "yew", "yoke",
    "yokel", "yonder", "yore", "you", "young", "youth", "zeal", "zebra",
    "zenith", "zephyr", "zero", "zest", "zinc", "zinnia", "zither", "zone",
];
