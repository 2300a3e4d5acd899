//! Static command table for Redis Cluster key-position lookup.
//!
//! Mirrors the generated `cmddef.h` table shipped with the reference
//! C client: for every command (and, where Redis groups them,
//! subcommand) this records its arity and how to find the key(s) it
//! touches. The table is sorted by `(name, subname)` so lookup is a
//! binary search rather than a hash probe.

/// How a command's first key argument is located.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyMethod {
    /// Command touches no key (e.g. `PING`, `CLUSTER INFO`).
    NoKey,
    /// The key sits at a fixed argument index (`key_position`).
    Index,
    /// `key_position` points at a count argument; that many keys follow.
    KeyNum,
    /// Key position depends on scanning for a keyword (e.g. `XREAD ... STREAMS`).
    Unknown,
}

/// One row of the command table.
#[derive(Debug, Clone, Copy)]
pub struct CommandSpec {
    /// Enum discriminant for this command/subcommand pair.
    pub kind: CommandKind,
    /// Command name, upper-case, as it appears on the wire.
    pub name: &'static str,
    /// Subcommand name, upper-case, if this command has subcommands.
    pub subname: Option<&'static str>,
    /// Arity: exact argument count if positive, minimum (inclusive) if negative.
    pub arity: i32,
    /// How the first key is located.
    pub key_method: KeyMethod,
    /// Argument index used by `key_method` (0 when `key_method` is `NoKey`).
    pub key_position: u16,
}

impl CommandSpec {
    /// Validates an argument count against this command's arity.
    ///
    /// Positive arity means exact; negative means "at least `-arity`".
    pub fn arity_matches(&self, argc: usize) -> bool {
        if self.arity >= 0 {
            argc as i32 == self.arity
        } else {
            argc as i32 >= -self.arity
        }
    }
}

macro_rules! command_table {
    ($($kind:ident, $name:expr, $subname:expr, $arity:expr, $method:ident, $pos:expr;)*) => {
        /// Enumerates every known command/subcommand pair.
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        #[allow(non_camel_case_types)]
        #[non_exhaustive]
        pub enum CommandKind {
            $($kind,)*
            /// Not present in the table; parsed but unroutable.
            Unknown,
        }

        /// Full command table, sorted by `(name, subname)` for binary search.
        static COMMAND_TABLE: &[CommandSpec] = &[
            $(
                CommandSpec {
                    kind: CommandKind::$kind,
                    name: $name,
                    subname: $subname,
                    arity: $arity,
                    key_method: KeyMethod::$method,
                    key_position: $pos,
                },
            )*
        ];
    };
}

command_table! {
    ACL_CAT, "ACL", Some("CAT"), -2, NoKey, 0;
    ACL_DELUSER, "ACL", Some("DELUSER"), -3, NoKey, 0;
    ACL_DRYRUN, "ACL", Some("DRYRUN"), -4, NoKey, 0;
    ACL_GENPASS, "ACL", Some("GENPASS"), -2, NoKey, 0;
    ACL_GETUSER, "ACL", Some("GETUSER"), 3, NoKey, 0;
    ACL_HELP, "ACL", Some("HELP"), 2, NoKey, 0;
    ACL_LIST, "ACL", Some("LIST"), 2, NoKey, 0;
    ACL_LOAD, "ACL", Some("LOAD"), 2, NoKey, 0;
    ACL_LOG, "ACL", Some("LOG"), -2, NoKey, 0;
    ACL_SAVE, "ACL", Some("SAVE"), 2, NoKey, 0;
    ACL_SETUSER, "ACL", Some("SETUSER"), -3, NoKey, 0;
    ACL_USERS, "ACL", Some("USERS"), 2, NoKey, 0;
    ACL_WHOAMI, "ACL", Some("WHOAMI"), 2, NoKey, 0;
    APPEND, "APPEND", None, 3, Index, 1;
    ASKING, "ASKING", None, 1, NoKey, 0;
    AUTH, "AUTH", None, -2, NoKey, 0;
    BGREWRITEAOF, "BGREWRITEAOF", None, 1, NoKey, 0;
    BGSAVE, "BGSAVE", None, -1, NoKey, 0;
    BITCOUNT, "BITCOUNT", None, -2, Index, 1;
    BITFIELD, "BITFIELD", None, -2, Index, 1;
    BITFIELD_RO, "BITFIELD_RO", None, -2, Index, 1;
    BITOP, "BITOP", None, -4, Index, 2;
    BITPOS, "BITPOS", None, -3, Index, 1;
    BLMOVE, "BLMOVE", None, 6, Index, 1;
    BLMPOP, "BLMPOP", None, -5, KeyNum, 2;
    BLPOP, "BLPOP", None, -3, Index, 1;
    BRPOP, "BRPOP", None, -3, Index, 1;
    BRPOPLPUSH, "BRPOPLPUSH", None, 4, Index, 1;
    BZMPOP, "BZMPOP", None, -5, KeyNum, 2;
    BZPOPMAX, "BZPOPMAX", None, -3, Index, 1;
    BZPOPMIN, "BZPOPMIN", None, -3, Index, 1;
    CLIENT_CACHING, "CLIENT", Some("CACHING"), 3, NoKey, 0;
    CLIENT_GETNAME, "CLIENT", Some("GETNAME"), 2, NoKey, 0;
    CLIENT_GETREDIR, "CLIENT", Some("GETREDIR"), 2, NoKey, 0;
    CLIENT_HELP, "CLIENT", Some("HELP"), 2, NoKey, 0;
    CLIENT_ID, "CLIENT", Some("ID"), 2, NoKey, 0;
    CLIENT_INFO, "CLIENT", Some("INFO"), 2, NoKey, 0;
    CLIENT_KILL, "CLIENT", Some("KILL"), -3, NoKey, 0;
    CLIENT_LIST, "CLIENT", Some("LIST"), -2, NoKey, 0;
    CLIENT_NO_EVICT, "CLIENT", Some("NO-EVICT"), 3, NoKey, 0;
    CLIENT_PAUSE, "CLIENT", Some("PAUSE"), -3, NoKey, 0;
    CLIENT_REPLY, "CLIENT", Some("REPLY"), 3, NoKey, 0;
    CLIENT_SETNAME, "CLIENT", Some("SETNAME"), 3, NoKey, 0;
    CLIENT_TRACKING, "CLIENT", Some("TRACKING"), -3, NoKey, 0;
    CLIENT_TRACKINGINFO, "CLIENT", Some("TRACKINGINFO"), 2, NoKey, 0;
    CLIENT_UNBLOCK, "CLIENT", Some("UNBLOCK"), -3, NoKey, 0;
    CLIENT_UNPAUSE, "CLIENT", Some("UNPAUSE"), 2, NoKey, 0;
    CLUSTER_ADDSLOTS, "CLUSTER", Some("ADDSLOTS"), -3, NoKey, 0;
    CLUSTER_ADDSLOTSRANGE, "CLUSTER", Some("ADDSLOTSRANGE"), -4, NoKey, 0;
    CLUSTER_BUMPEPOCH, "CLUSTER", Some("BUMPEPOCH"), 2, NoKey, 0;
    CLUSTER_COUNT_FAILURE_REPORTS, "CLUSTER", Some("COUNT-FAILURE-REPORTS"), 3, NoKey, 0;
    CLUSTER_COUNTKEYSINSLOT, "CLUSTER", Some("COUNTKEYSINSLOT"), 3, NoKey, 0;
    CLUSTER_DELSLOTS, "CLUSTER", Some("DELSLOTS"), -3, NoKey, 0;
    CLUSTER_DELSLOTSRANGE, "CLUSTER", Some("DELSLOTSRANGE"), -4, NoKey, 0;
    CLUSTER_FAILOVER, "CLUSTER", Some("FAILOVER"), -2, NoKey, 0;
    CLUSTER_FLUSHSLOTS, "CLUSTER", Some("FLUSHSLOTS"), 2, NoKey, 0;
    CLUSTER_FORGET, "CLUSTER", Some("FORGET"), 3, NoKey, 0;
    CLUSTER_GETKEYSINSLOT, "CLUSTER", Some("GETKEYSINSLOT"), 4, NoKey, 0;
    CLUSTER_HELP, "CLUSTER", Some("HELP"), 2, NoKey, 0;
    CLUSTER_INFO, "CLUSTER", Some("INFO"), 2, NoKey, 0;
    CLUSTER_KEYSLOT, "CLUSTER", Some("KEYSLOT"), 3, NoKey, 0;
    CLUSTER_LINKS, "CLUSTER", Some("LINKS"), 2, NoKey, 0;
    CLUSTER_MEET, "CLUSTER", Some("MEET"), -4, NoKey, 0;
    CLUSTER_MYID, "CLUSTER", Some("MYID"), 2, NoKey, 0;
    CLUSTER_MYSHARDID, "CLUSTER", Some("MYSHARDID"), 2, NoKey, 0;
    CLUSTER_NODES, "CLUSTER", Some("NODES"), 2, NoKey, 0;
    CLUSTER_REPLICAS, "CLUSTER", Some("REPLICAS"), 3, NoKey, 0;
    CLUSTER_REPLICATE, "CLUSTER", Some("REPLICATE"), 3, NoKey, 0;
    CLUSTER_RESET, "CLUSTER", Some("RESET"), -2, NoKey, 0;
    CLUSTER_SAVECONFIG, "CLUSTER", Some("SAVECONFIG"), 2, NoKey, 0;
    CLUSTER_SET_CONFIG_EPOCH, "CLUSTER", Some("SET-CONFIG-EPOCH"), 3, NoKey, 0;
    CLUSTER_SETSLOT, "CLUSTER", Some("SETSLOT"), -4, NoKey, 0;
    CLUSTER_SHARDS, "CLUSTER", Some("SHARDS"), 2, NoKey, 0;
    CLUSTER_SLAVES, "CLUSTER", Some("SLAVES"), 3, NoKey, 0;
    CLUSTER_SLOTS, "CLUSTER", Some("SLOTS"), 2, NoKey, 0;
    COMMAND_COUNT, "COMMAND", Some("COUNT"), 2, NoKey, 0;
    COMMAND_DOCS, "COMMAND", Some("DOCS"), -2, NoKey, 0;
    COMMAND_GETKEYS, "COMMAND", Some("GETKEYS"), -3, NoKey, 0;
    COMMAND_GETKEYSANDFLAGS, "COMMAND", Some("GETKEYSANDFLAGS"), -3, NoKey, 0;
    COMMAND_HELP, "COMMAND", Some("HELP"), 2, NoKey, 0;
    COMMAND_INFO, "COMMAND", Some("INFO"), -2, NoKey, 0;
    COMMAND_LIST, "COMMAND", Some("LIST"), -2, NoKey, 0;
    CONFIG_GET, "CONFIG", Some("GET"), -3, NoKey, 0;
    CONFIG_HELP, "CONFIG", Some("HELP"), 2, NoKey, 0;
    CONFIG_RESETSTAT, "CONFIG", Some("RESETSTAT"), 2, NoKey, 0;
    CONFIG_REWRITE, "CONFIG", Some("REWRITE"), 2, NoKey, 0;
    CONFIG_SET, "CONFIG", Some("SET"), -4, NoKey, 0;
    COPY, "COPY", None, -3, Index, 1;
    DBSIZE, "DBSIZE", None, 1, NoKey, 0;
    DEBUG, "DEBUG", None, -2, NoKey, 0;
    DECR, "DECR", None, 2, Index, 1;
    DECRBY, "DECRBY", None, 3, Index, 1;
    DEL, "DEL", None, -2, Index, 1;
    DISCARD, "DISCARD", None, 1, NoKey, 0;
    DUMP, "DUMP", None, 2, Index, 1;
    ECHO, "ECHO", None, 2, NoKey, 0;
    EVAL, "EVAL", None, -3, KeyNum, 2;
    EVALSHA, "EVALSHA", None, -3, KeyNum, 2;
    EVALSHA_RO, "EVALSHA_RO", None, -3, KeyNum, 2;
    EVAL_RO, "EVAL_RO", None, -3, KeyNum, 2;
    EXEC, "EXEC", None, 1, NoKey, 0;
    EXISTS, "EXISTS", None, -2, Index, 1;
    EXPIRE, "EXPIRE", None, -3, Index, 1;
    EXPIREAT, "EXPIREAT", None, -3, Index, 1;
    EXPIRETIME, "EXPIRETIME", None, 2, Index, 1;
    FAILOVER, "FAILOVER", None, -1, NoKey, 0;
    FCALL, "FCALL", None, -3, KeyNum, 2;
    FCALL_RO, "FCALL_RO", None, -3, KeyNum, 2;
    FLUSHALL, "FLUSHALL", None, -1, NoKey, 0;
    FLUSHDB, "FLUSHDB", None, -1, NoKey, 0;
    FUNCTION_DELETE, "FUNCTION", Some("DELETE"), 3, NoKey, 0;
    FUNCTION_DUMP, "FUNCTION", Some("DUMP"), 2, NoKey, 0;
    FUNCTION_FLUSH, "FUNCTION", Some("FLUSH"), -2, NoKey, 0;
    FUNCTION_HELP, "FUNCTION", Some("HELP"), 2, NoKey, 0;
    FUNCTION_KILL, "FUNCTION", Some("KILL"), 2, NoKey, 0;
    FUNCTION_LIST, "FUNCTION", Some("LIST"), -2, NoKey, 0;
    FUNCTION_LOAD, "FUNCTION", Some("LOAD"), -3, NoKey, 0;
    FUNCTION_RESTORE, "FUNCTION", Some("RESTORE"), -3, NoKey, 0;
    FUNCTION_STATS, "FUNCTION", Some("STATS"), 2, NoKey, 0;
    GEOADD, "GEOADD", None, -5, Index, 1;
    GEODIST, "GEODIST", None, -4, Index, 1;
    GEOHASH, "GEOHASH", None, -2, Index, 1;
    GEOPOS, "GEOPOS", None, -2, Index, 1;
    GEORADIUS, "GEORADIUS", None, -6, Index, 1;
    GEORADIUSBYMEMBER, "GEORADIUSBYMEMBER", None, -5, Index, 1;
    GEORADIUSBYMEMBER_RO, "GEORADIUSBYMEMBER_RO", None, -5, Index, 1;
    GEORADIUS_RO, "GEORADIUS_RO", None, -6, Index, 1;
    GEOSEARCH, "GEOSEARCH", None, -7, Index, 1;
    GEOSEARCHSTORE, "GEOSEARCHSTORE", None, -8, Index, 1;
    GET, "GET", None, 2, Index, 1;
    GETBIT, "GETBIT", None, 3, Index, 1;
    GETDEL, "GETDEL", None, 2, Index, 1;
    GETEX, "GETEX", None, -2, Index, 1;
    GETRANGE, "GETRANGE", None, 4, Index, 1;
    GETSET, "GETSET", None, 3, Index, 1;
    HDEL, "HDEL", None, -3, Index, 1;
    HELLO, "HELLO", None, -1, NoKey, 0;
    HEXISTS, "HEXISTS", None, 3, Index, 1;
    HGET, "HGET", None, 3, Index, 1;
    HGETALL, "HGETALL", None, 2, Index, 1;
    HINCRBY, "HINCRBY", None, 4, Index, 1;
    HINCRBYFLOAT, "HINCRBYFLOAT", None, 4, Index, 1;
    HKEYS, "HKEYS", None, 2, Index, 1;
    HLEN, "HLEN", None, 2, Index, 1;
    HMGET, "HMGET", None, -3, Index, 1;
    HMSET, "HMSET", None, -4, Index, 1;
    HRANDFIELD, "HRANDFIELD", None, -2, Index, 1;
    HSCAN, "HSCAN", None, -3, Index, 1;
    HSET, "HSET", None, -4, Index, 1;
    HSETNX, "HSETNX", None, 4, Index, 1;
    HSTRLEN, "HSTRLEN", None, 3, Index, 1;
    HVALS, "HVALS", None, 2, Index, 1;
    INCR, "INCR", None, 2, Index, 1;
    INCRBY, "INCRBY", None, 3, Index, 1;
    INCRBYFLOAT, "INCRBYFLOAT", None, 3, Index, 1;
    INFO, "INFO", None, -1, NoKey, 0;
    KEYS, "KEYS", None, 2, NoKey, 0;
    LASTSAVE, "LASTSAVE", None, 1, NoKey, 0;
    LATENCY_DOCTOR, "LATENCY", Some("DOCTOR"), 2, NoKey, 0;
    LATENCY_GRAPH, "LATENCY", Some("GRAPH"), 3, NoKey, 0;
    LATENCY_HELP, "LATENCY", Some("HELP"), 2, NoKey, 0;
    LATENCY_HISTOGRAM, "LATENCY", Some("HISTOGRAM"), -2, NoKey, 0;
    LATENCY_HISTORY, "LATENCY", Some("HISTORY"), 3, NoKey, 0;
    LATENCY_LATEST, "LATENCY", Some("LATEST"), 2, NoKey, 0;
    LATENCY_RESET, "LATENCY", Some("RESET"), -2, NoKey, 0;
    LCS, "LCS", None, -3, Index, 1;
    LINDEX, "LINDEX", None, 3, Index, 1;
    LINSERT, "LINSERT", None, 5, Index, 1;
    LLEN, "LLEN", None, 2, Index, 1;
    LMOVE, "LMOVE", None, 5, Index, 1;
    LMPOP, "LMPOP", None, -4, KeyNum, 1;
    LOLWUT, "LOLWUT", None, -1, NoKey, 0;
    LPOP, "LPOP", None, -2, Index, 1;
    LPOS, "LPOS", None, -3, Index, 1;
    LPUSH, "LPUSH", None, -3, Index, 1;
    LPUSHX, "LPUSHX", None, -3, Index, 1;
    LRANGE, "LRANGE", None, 4, Index, 1;
    LREM, "LREM", None, 4, Index, 1;
    LSET, "LSET", None, 4, Index, 1;
    LTRIM, "LTRIM", None, 4, Index, 1;
    MEMORY_DOCTOR, "MEMORY", Some("DOCTOR"), 2, NoKey, 0;
    MEMORY_HELP, "MEMORY", Some("HELP"), 2, NoKey, 0;
    MEMORY_MALLOC_STATS, "MEMORY", Some("MALLOC-STATS"), 2, NoKey, 0;
    MEMORY_PURGE, "MEMORY", Some("PURGE"), 2, NoKey, 0;
    MEMORY_STATS, "MEMORY", Some("STATS"), 2, NoKey, 0;
    MEMORY_USAGE, "MEMORY", Some("USAGE"), -3, Index, 2;
    MGET, "MGET", None, -2, Index, 1;
    MIGRATE, "MIGRATE", None, -6, Index, 3;
    MODULE_HELP, "MODULE", Some("HELP"), 2, NoKey, 0;
    MODULE_LIST, "MODULE", Some("LIST"), 2, NoKey, 0;
    MODULE_LOAD, "MODULE", Some("LOAD"), -3, NoKey, 0;
    MODULE_LOADEX, "MODULE", Some("LOADEX"), -3, NoKey, 0;
    MODULE_UNLOAD, "MODULE", Some("UNLOAD"), 3, NoKey, 0;
    MONITOR, "MONITOR", None, 1, NoKey, 0;
    MOVE, "MOVE", None, 3, Index, 1;
    MSET, "MSET", None, -3, Index, 1;
    MSETNX, "MSETNX", None, -3, Index, 1;
    MULTI, "MULTI", None, 1, NoKey, 0;
    OBJECT_ENCODING, "OBJECT", Some("ENCODING"), 3, Index, 2;
    OBJECT_FREQ, "OBJECT", Some("FREQ"), 3, Index, 2;
    OBJECT_HELP, "OBJECT", Some("HELP"), 2, NoKey, 0;
    OBJECT_IDLETIME, "OBJECT", Some("IDLETIME"), 3, Index, 2;
    OBJECT_REFCOUNT, "OBJECT", Some("REFCOUNT"), 3, Index, 2;
    PERSIST, "PERSIST", None, 2, Index, 1;
    PEXPIRE, "PEXPIRE", None, -3, Index, 1;
    PEXPIREAT, "PEXPIREAT", None, -3, Index, 1;
    PEXPIRETIME, "PEXPIRETIME", None, 2, Index, 1;
    PFADD, "PFADD", None, -2, Index, 1;
    PFCOUNT, "PFCOUNT", None, -2, Index, 1;
    PFDEBUG, "PFDEBUG", None, 3, Index, 2;
    PFMERGE, "PFMERGE", None, -2, Index, 1;
    PFSELFTEST, "PFSELFTEST", None, 1, NoKey, 0;
    PING, "PING", None, -1, NoKey, 0;
    PSETEX, "PSETEX", None, 4, Index, 1;
    PSUBSCRIBE, "PSUBSCRIBE", None, -2, NoKey, 0;
    PSYNC, "PSYNC", None, -3, NoKey, 0;
    PTTL, "PTTL", None, 2, Index, 1;
    PUBLISH, "PUBLISH", None, 3, NoKey, 0;
    PUBSUB_CHANNELS, "PUBSUB", Some("CHANNELS"), -2, NoKey, 0;
    PUBSUB_HELP, "PUBSUB", Some("HELP"), 2, NoKey, 0;
    PUBSUB_NUMPAT, "PUBSUB", Some("NUMPAT"), 2, NoKey, 0;
    PUBSUB_NUMSUB, "PUBSUB", Some("NUMSUB"), -2, NoKey, 0;
    PUBSUB_SHARDCHANNELS, "PUBSUB", Some("SHARDCHANNELS"), -2, NoKey, 0;
    PUBSUB_SHARDNUMSUB, "PUBSUB", Some("SHARDNUMSUB"), -2, NoKey, 0;
    PUNSUBSCRIBE, "PUNSUBSCRIBE", None, -1, NoKey, 0;
    QUIT, "QUIT", None, -1, NoKey, 0;
    RANDOMKEY, "RANDOMKEY", None, 1, NoKey, 0;
    READONLY, "READONLY", None, 1, NoKey, 0;
    READWRITE, "READWRITE", None, 1, NoKey, 0;
    RENAME, "RENAME", None, 3, Index, 1;
    RENAMENX, "RENAMENX", None, 3, Index, 1;
    REPLCONF, "REPLCONF", None, -1, NoKey, 0;
    REPLICAOF, "REPLICAOF", None, 3, NoKey, 0;
    RESET, "RESET", None, 1, NoKey, 0;
    RESTORE, "RESTORE", None, -4, Index, 1;
    RESTORE_ASKING, "RESTORE-ASKING", None, -4, Index, 1;
    ROLE, "ROLE", None, 1, NoKey, 0;
    RPOP, "RPOP", None, -2, Index, 1;
    RPOPLPUSH, "RPOPLPUSH", None, 3, Index, 1;
    RPUSH, "RPUSH", None, -3, Index, 1;
    RPUSHX, "RPUSHX", None, -3, Index, 1;
    SADD, "SADD", None, -3, Index, 1;
    SAVE, "SAVE", None, 1, NoKey, 0;
    SCAN, "SCAN", None, -2, NoKey, 0;
    SCARD, "SCARD", None, 2, Index, 1;
    SCRIPT_DEBUG, "SCRIPT", Some("DEBUG"), 3, NoKey, 0;
    SCRIPT_EXISTS, "SCRIPT", Some("EXISTS"), -3, NoKey, 0;
    SCRIPT_FLUSH, "SCRIPT", Some("FLUSH"), -2, NoKey, 0;
    SCRIPT_HELP, "SCRIPT", Some("HELP"), 2, NoKey, 0;
    SCRIPT_KILL, "SCRIPT", Some("KILL"), 2, NoKey, 0;
    SCRIPT_LOAD, "SCRIPT", Some("LOAD"), 3, NoKey, 0;
    SDIFF, "SDIFF", None, -2, Index, 1;
    SDIFFSTORE, "SDIFFSTORE", None, -3, Index, 1;
    SELECT, "SELECT", None, 2, NoKey, 0;
    SENTINEL_CKQUORUM, "SENTINEL", Some("CKQUORUM"), 3, NoKey, 0;
    SENTINEL_CONFIG, "SENTINEL", Some("CONFIG"), -3, NoKey, 0;
    SENTINEL_DEBUG, "SENTINEL", Some("DEBUG"), -2, NoKey, 0;
    SENTINEL_FAILOVER, "SENTINEL", Some("FAILOVER"), 3, NoKey, 0;
    SENTINEL_FLUSHCONFIG, "SENTINEL", Some("FLUSHCONFIG"), 2, NoKey, 0;
    SENTINEL_GET_MASTER_ADDR_BY_NAME, "SENTINEL", Some("GET-MASTER-ADDR-BY-NAME"), 3, NoKey, 0;
    SENTINEL_HELP, "SENTINEL", Some("HELP"), 2, NoKey, 0;
    SENTINEL_INFO_CACHE, "SENTINEL", Some("INFO-CACHE"), -3, NoKey, 0;
    SENTINEL_IS_MASTER_DOWN_BY_ADDR, "SENTINEL", Some("IS-MASTER-DOWN-BY-ADDR"), 6, NoKey, 0;
    SENTINEL_MASTER, "SENTINEL", Some("MASTER"), 3, NoKey, 0;
    SENTINEL_MASTERS, "SENTINEL", Some("MASTERS"), 2, NoKey, 0;
    SENTINEL_MONITOR, "SENTINEL", Some("MONITOR"), 6, NoKey, 0;
    SENTINEL_MYID, "SENTINEL", Some("MYID"), 2, NoKey, 0;
    SENTINEL_PENDING_SCRIPTS, "SENTINEL", Some("PENDING-SCRIPTS"), 2, NoKey, 0;
    SENTINEL_REMOVE, "SENTINEL", Some("REMOVE"), 3, NoKey, 0;
    SENTINEL_REPLICAS, "SENTINEL", Some("REPLICAS"), 3, NoKey, 0;
    SENTINEL_RESET, "SENTINEL", Some("RESET"), 3, NoKey, 0;
    SENTINEL_SENTINELS, "SENTINEL", Some("SENTINELS"), 3, NoKey, 0;
    SENTINEL_SET, "SENTINEL", Some("SET"), -5, NoKey, 0;
    SENTINEL_SIMULATE_FAILURE, "SENTINEL", Some("SIMULATE-FAILURE"), -3, NoKey, 0;
    SENTINEL_SLAVES, "SENTINEL", Some("SLAVES"), 3, NoKey, 0;
    SET, "SET", None, -3, Index, 1;
    SETBIT, "SETBIT", None, 4, Index, 1;
    SETEX, "SETEX", None, 4, Index, 1;
    SETNX, "SETNX", None, 3, Index, 1;
    SETRANGE, "SETRANGE", None, 4, Index, 1;
    SHUTDOWN, "SHUTDOWN", None, -1, NoKey, 0;
    SINTER, "SINTER", None, -2, Index, 1;
    SINTERCARD, "SINTERCARD", None, -3, KeyNum, 1;
    SINTERSTORE, "SINTERSTORE", None, -3, Index, 1;
    SISMEMBER, "SISMEMBER", None, 3, Index, 1;
    SLAVEOF, "SLAVEOF", None, 3, NoKey, 0;
    SLOWLOG_GET, "SLOWLOG", Some("GET"), -2, NoKey, 0;
    SLOWLOG_HELP, "SLOWLOG", Some("HELP"), 2, NoKey, 0;
    SLOWLOG_LEN, "SLOWLOG", Some("LEN"), 2, NoKey, 0;
    SLOWLOG_RESET, "SLOWLOG", Some("RESET"), 2, NoKey, 0;
    SMEMBERS, "SMEMBERS", None, 2, Index, 1;
    SMISMEMBER, "SMISMEMBER", None, -3, Index, 1;
    SMOVE, "SMOVE", None, 4, Index, 1;
    SORT, "SORT", None, -2, Index, 1;
    SORT_RO, "SORT_RO", None, -2, Index, 1;
    SPOP, "SPOP", None, -2, Index, 1;
    SPUBLISH, "SPUBLISH", None, 3, Index, 1;
    SRANDMEMBER, "SRANDMEMBER", None, -2, Index, 1;
    SREM, "SREM", None, -3, Index, 1;
    SSCAN, "SSCAN", None, -3, Index, 1;
    SSUBSCRIBE, "SSUBSCRIBE", None, -2, Index, 1;
    STRLEN, "STRLEN", None, 2, Index, 1;
    SUBSCRIBE, "SUBSCRIBE", None, -2, NoKey, 0;
    SUBSTR, "SUBSTR", None, 4, Index, 1;
    SUNION, "SUNION", None, -2, Index, 1;
    SUNIONSTORE, "SUNIONSTORE", None, -3, Index, 1;
    SUNSUBSCRIBE, "SUNSUBSCRIBE", None, -1, Index, 1;
    SWAPDB, "SWAPDB", None, 3, NoKey, 0;
    SYNC, "SYNC", None, 1, NoKey, 0;
    TIME, "TIME", None, 1, NoKey, 0;
    TOUCH, "TOUCH", None, -2, Index, 1;
    TTL, "TTL", None, 2, Index, 1;
    TYPE, "TYPE", None, 2, Index, 1;
    UNLINK, "UNLINK", None, -2, Index, 1;
    UNSUBSCRIBE, "UNSUBSCRIBE", None, -1, NoKey, 0;
    UNWATCH, "UNWATCH", None, 1, NoKey, 0;
    WAIT, "WAIT", None, 3, NoKey, 0;
    WATCH, "WATCH", None, -2, Index, 1;
    XACK, "XACK", None, -4, Index, 1;
    XADD, "XADD", None, -5, Index, 1;
    XAUTOCLAIM, "XAUTOCLAIM", None, -6, Index, 1;
    XCLAIM, "XCLAIM", None, -6, Index, 1;
    XDEL, "XDEL", None, -3, Index, 1;
    XGROUP_CREATE, "XGROUP", Some("CREATE"), -5, Index, 2;
    XGROUP_CREATECONSUMER, "XGROUP", Some("CREATECONSUMER"), 5, Index, 2;
    XGROUP_DELCONSUMER, "XGROUP", Some("DELCONSUMER"), 5, Index, 2;
    XGROUP_DESTROY, "XGROUP", Some("DESTROY"), 4, Index, 2;
    XGROUP_HELP, "XGROUP", Some("HELP"), 2, NoKey, 0;
    XGROUP_SETID, "XGROUP", Some("SETID"), -5, Index, 2;
    XINFO_CONSUMERS, "XINFO", Some("CONSUMERS"), 4, Index, 2;
    XINFO_GROUPS, "XINFO", Some("GROUPS"), 3, Index, 2;
    XINFO_HELP, "XINFO", Some("HELP"), 2, NoKey, 0;
    XINFO_STREAM, "XINFO", Some("STREAM"), -3, Index, 2;
    XLEN, "XLEN", None, 2, Index, 1;
    XPENDING, "XPENDING", None, -3, Index, 1;
    XRANGE, "XRANGE", None, -4, Index, 1;
    XREAD, "XREAD", None, -4, Unknown, 0;
    XREADGROUP, "XREADGROUP", None, -7, Unknown, 0;
    XREVRANGE, "XREVRANGE", None, -4, Index, 1;
    XSETID, "XSETID", None, -3, Index, 1;
    XTRIM, "XTRIM", None, -4, Index, 1;
    ZADD, "ZADD", None, -4, Index, 1;
    ZCARD, "ZCARD", None, 2, Index, 1;
    ZCOUNT, "ZCOUNT", None, 4, Index, 1;
    ZDIFF, "ZDIFF", None, -3, KeyNum, 1;
    ZDIFFSTORE, "ZDIFFSTORE", None, -4, Index, 1;
    ZINCRBY, "ZINCRBY", None, 4, Index, 1;
    ZINTER, "ZINTER", None, -3, KeyNum, 1;
    ZINTERCARD, "ZINTERCARD", None, -3, KeyNum, 1;
    ZINTERSTORE, "ZINTERSTORE", None, -4, Index, 1;
    ZLEXCOUNT, "ZLEXCOUNT", None, 4, Index, 1;
    ZMPOP, "ZMPOP", None, -4, KeyNum, 1;
    ZMSCORE, "ZMSCORE", None, -3, Index, 1;
    ZPOPMAX, "ZPOPMAX", None, -2, Index, 1;
    ZPOPMIN, "ZPOPMIN", None, -2, Index, 1;
    ZRANDMEMBER, "ZRANDMEMBER", None, -2, Index, 1;
    ZRANGE, "ZRANGE", None, -4, Index, 1;
    ZRANGEBYLEX, "ZRANGEBYLEX", None, -4, Index, 1;
    ZRANGEBYSCORE, "ZRANGEBYSCORE", None, -4, Index, 1;
    ZRANGESTORE, "ZRANGESTORE", None, -5, Index, 1;
    ZRANK, "ZRANK", None, -3, Index, 1;
    ZREM, "ZREM", None, -3, Index, 1;
    ZREMRANGEBYLEX, "ZREMRANGEBYLEX", None, 4, Index, 1;
    ZREMRANGEBYRANK, "ZREMRANGEBYRANK", None, 4, Index, 1;
    ZREMRANGEBYSCORE, "ZREMRANGEBYSCORE", None, 4, Index, 1;
    ZREVRANGE, "ZREVRANGE", None, -4, Index, 1;
    ZREVRANGEBYLEX, "ZREVRANGEBYLEX", None, -4, Index, 1;
    ZREVRANGEBYSCORE, "ZREVRANGEBYSCORE", None, -4, Index, 1;
    ZREVRANK, "ZREVRANK", None, -3, Index, 1;
    ZSCAN, "ZSCAN", None, -3, Index, 1;
    ZSCORE, "ZSCORE", None, 3, Index, 1;
    ZUNION, "ZUNION", None, -3, KeyNum, 1;
    ZUNIONSTORE, "ZUNIONSTORE", None, -4, Index, 1;
}

/// Looks up a command (and optional subcommand) in the table.
///
/// Matching is case-insensitive. If the matched row declares a
/// subname, `arg1` must be present and case-insensitively equal to it
/// for the lookup to succeed; a row with no subname ignores `arg1`
/// entirely (passing one is harmless).
pub fn lookup(arg0: &[u8], arg1: Option<&[u8]>) -> Option<&'static CommandSpec> {
    let name = to_upper_ascii(arg0);

    let start = COMMAND_TABLE.partition_point(|spec| spec.name < name.as_str());
    let candidates = COMMAND_TABLE[start..]
        .iter()
        .take_while(|spec| spec.name == name.as_str());

    for spec in candidates {
        match spec.subname {
            None => return Some(spec),
            Some(sub) => {
                if let Some(arg1) = arg1 {
                    if to_upper_ascii(arg1).as_str() == sub {
                        return Some(spec);
                    }
                }
            }
        }
    }

    None
}

fn to_upper_ascii(bytes: &[u8]) -> String {
    bytes.iter().map(|b| b.to_ascii_uppercase() as char).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_sorted_by_name_then_subname() {
        for pair in COMMAND_TABLE.windows(2) {
            let (a, b) = (&pair[0], &pair[1]);
            let key_a = (a.name, a.subname.unwrap_or(""));
            let key_b = (b.name, b.subname.unwrap_or(""));
            assert!(key_a <= key_b, "table out of order: {:?} then {:?}", key_a, key_b);
        }
    }

    #[test]
    fn lookup_simple_command() {
        let spec = lookup(b"get", None).expect("GET should be found");
        assert_eq!(spec.kind, CommandKind::GET);
        assert_eq!(spec.arity, 2);
        assert_eq!(spec.key_method, KeyMethod::Index);
        assert_eq!(spec.key_position, 1);
    }

    #[test]
    fn lookup_is_case_insensitive() {
        let spec = lookup(b"GeT", None).expect("mixed-case GET should be found");
        assert_eq!(spec.kind, CommandKind::GET);
    }

    #[test]
    fn lookup_multi_key_commands() {
        let mset = lookup(b"MSET", None).unwrap();
        assert_eq!(mset.arity, -3);
        assert_eq!(mset.key_method, KeyMethod::Index);

        let del = lookup(b"DEL", None).unwrap();
        assert_eq!(del.arity, -2);
        assert_eq!(del.key_method, KeyMethod::Index);

        let exists = lookup(b"EXISTS", None).unwrap();
        assert_eq!(exists.arity, -2);
        assert_eq!(exists.key_method, KeyMethod::Index);
    }

    #[test]
    fn lookup_migrate_uses_index_method() {
        let migrate = lookup(b"MIGRATE", None).unwrap();
        assert_eq!(migrate.arity, -6);
        assert_eq!(migrate.key_method, KeyMethod::Index);
        assert_eq!(migrate.key_position, 3);
    }

    #[test]
    fn lookup_stream_reads_use_unknown_method() {
        let xread = lookup(b"XREAD", None).unwrap();
        assert_eq!(xread.key_method, KeyMethod::Unknown);

        let xreadgroup = lookup(b"XREADGROUP", None).unwrap();
        assert_eq!(xreadgroup.key_method, KeyMethod::Unknown);
    }

    #[test]
    fn lookup_requires_subname_when_declared() {
        let nodes = lookup(b"CLUSTER", Some(b"NODES")).expect("CLUSTER NODES should be found");
        assert_eq!(nodes.kind, CommandKind::CLUSTER_NODES);

        let slots = lookup(b"CLUSTER", Some(b"SLOTS")).expect("CLUSTER SLOTS should be found");
        assert_eq!(slots.kind, CommandKind::CLUSTER_SLOTS);
    }

    #[test]
    fn lookup_subcommand_without_arg1_fails() {
        assert!(lookup(b"CLUSTER", None).is_none());
        assert!(lookup(b"XGROUP", None).is_none());
    }

    #[test]
    fn lookup_wrong_subname_fails() {
        assert!(lookup(b"CLUSTER", Some(b"BOGUS")).is_none());
    }

    #[test]
    fn lookup_unknown_command_fails() {
        assert!(lookup(b"NOTACOMMAND", None).is_none());
    }

    #[test]
    fn arity_matches_exact_and_minimum() {
        let get = lookup(b"GET", None).unwrap();
        assert!(get.arity_matches(2));
        assert!(!get.arity_matches(3));

        let mset = lookup(b"MSET", None).unwrap();
        assert!(!mset.arity_matches(2));
        assert!(mset.arity_matches(3));
        assert!(mset.arity_matches(5));
    }
}
